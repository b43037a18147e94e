use serial_test::serial;
use std::path::PathBuf;
use synth_fs::config::{ENV_LOG_FILE, ENV_LOG_LEVEL, ENV_PRESERVE_METADATA, ENV_ROOT};
use synth_fs::{Config, LogLevel};

fn clear_env() {
    for key in [ENV_ROOT, ENV_LOG_LEVEL, ENV_LOG_FILE, ENV_PRESERVE_METADATA] {
        unsafe {
            std::env::remove_var(key);
        }
    }
}

#[test]
#[serial]
fn env_unset_gives_defaults() {
    clear_env();
    let cfg = Config::from_env();
    assert_eq!(cfg.root, PathBuf::from("."));
    assert_eq!(cfg.log_level, LogLevel::Normal);
    assert!(cfg.preserve_metadata);
    assert!(cfg.log_file.is_none());
}

#[test]
#[serial]
fn env_values_override_defaults() {
    clear_env();
    unsafe {
        std::env::set_var(ENV_ROOT, "/srv/generated");
        std::env::set_var(ENV_LOG_LEVEL, "DEBUG");
        std::env::set_var(ENV_LOG_FILE, "/tmp/synth_fs.log");
        std::env::set_var(ENV_PRESERVE_METADATA, "no");
    }

    let cfg = Config::from_env();
    clear_env();

    assert_eq!(cfg.root, PathBuf::from("/srv/generated"));
    assert_eq!(cfg.log_level, LogLevel::Debug);
    assert_eq!(cfg.log_file, Some(PathBuf::from("/tmp/synth_fs.log")));
    assert!(!cfg.preserve_metadata);
}

#[test]
#[serial]
fn bad_env_values_are_ignored() {
    clear_env();
    unsafe {
        std::env::set_var(ENV_LOG_LEVEL, "shouty");
        std::env::set_var(ENV_PRESERVE_METADATA, "perhaps");
        std::env::set_var(ENV_ROOT, "   ");
    }

    let cfg = Config::from_env();
    clear_env();

    assert_eq!(cfg.log_level, LogLevel::Normal);
    assert!(cfg.preserve_metadata);
    assert_eq!(cfg.root, PathBuf::from("."));
}

use filetime::FileTime;
use std::fs;
use std::io;
use std::path::PathBuf;
use synth_fs::{move_into, Config, PathSpec, SynthError};
use tempfile::tempdir;

#[test]
fn file_copy_is_byte_identical() -> Result<(), Box<dyn std::error::Error>> {
    let td = tempdir()?;
    let data: Vec<u8> = (0..70_000u32).map(|i| (i % 253) as u8).collect();
    fs::write(td.path().join("blob.bin"), &data)?;
    let out = td.path().join("out");

    let summary = move_into(&Config::new(td.path()), "blob.bin", Some(&out))?;

    assert_eq!(summary.copied, vec![out.join("blob.bin")]);
    assert_eq!(summary.bytes, data.len() as u64);
    assert_eq!(fs::read(out.join("blob.bin"))?, data);
    Ok(())
}

#[test]
fn file_copy_preserves_mtime_by_default() -> Result<(), Box<dyn std::error::Error>> {
    let td = tempdir()?;
    let src = td.path().join("gen.py");
    fs::write(&src, "print('hi')\n")?;
    let old = FileTime::from_unix_time(1_500_000_000, 0);
    filetime::set_file_mtime(&src, old)?;
    let out = td.path().join("out");

    move_into(&Config::new(td.path()), "gen.py", Some(&out))?;

    let copied = FileTime::from_last_modification_time(&fs::metadata(out.join("gen.py"))?);
    assert_eq!(copied, old);
    Ok(())
}

#[test]
fn metadata_is_skipped_when_disabled() -> Result<(), Box<dyn std::error::Error>> {
    let td = tempdir()?;
    let src = td.path().join("gen.py");
    fs::write(&src, "x")?;
    let old = FileTime::from_unix_time(1_000_000_000, 0);
    filetime::set_file_mtime(&src, old)?;
    let cfg = Config {
        preserve_metadata: false,
        ..Config::new(td.path())
    };

    move_into(&cfg, "gen.py", Some(&td.path().join("out")))?;

    let copied = FileTime::from_last_modification_time(&fs::metadata(td.path().join("out/gen.py"))?);
    assert_ne!(copied, old);
    Ok(())
}

#[cfg(unix)]
#[test]
fn file_copy_preserves_mode() -> Result<(), Box<dyn std::error::Error>> {
    use std::os::unix::fs::PermissionsExt;
    let td = tempdir()?;
    let src = td.path().join("run.sh");
    fs::write(&src, "#!/bin/sh\n")?;
    fs::set_permissions(&src, fs::Permissions::from_mode(0o750))?;

    move_into(&Config::new(td.path()), "run.sh", Some(&td.path().join("out")))?;

    let mode = fs::metadata(td.path().join("out/run.sh"))?.permissions().mode();
    assert_eq!(mode & 0o777, 0o750);
    Ok(())
}

#[test]
fn destination_defaults_to_root() -> Result<(), Box<dyn std::error::Error>> {
    let td = tempdir()?;
    let gen_dir = td.path().join("gen");
    fs::create_dir_all(&gen_dir)?;
    fs::write(gen_dir.join("a.txt"), "a")?;

    move_into(&Config::new(td.path()), "gen", None)?;

    assert_eq!(fs::read_to_string(td.path().join("a.txt"))?, "a");
    Ok(())
}

#[test]
fn glob_copies_each_match() -> Result<(), Box<dyn std::error::Error>> {
    let td = tempdir()?;
    for name in ["a.py", "b.py", "c.txt"] {
        fs::write(td.path().join(name), name)?;
    }
    let out = td.path().join("out");

    let summary = move_into(&Config::new(td.path()), "*.py", Some(&out))?;

    let mut got: Vec<PathBuf> = summary.copied;
    got.sort();
    assert_eq!(got, vec![out.join("a.py"), out.join("b.py")]);
    assert!(!out.join("c.txt").exists());
    Ok(())
}

#[test]
fn missing_relative_literal_is_not_found() {
    let td = tempdir().unwrap();
    let err = move_into(
        &Config::new(td.path()),
        PathSpec::literal("definitely/not/here.txt"),
        Some(&td.path().join("out")),
    )
    .unwrap_err();
    assert_eq!(err.as_io().map(|e| e.kind()), Some(io::ErrorKind::NotFound));
    assert!(!td.path().join("out").exists());
}

#[test]
fn unmatched_glob_copies_nothing() -> Result<(), Box<dyn std::error::Error>> {
    let td = tempdir()?;
    let out = td.path().join("out");
    let summary = move_into(&Config::new(td.path()), "*.nothing", Some(&out))?;
    assert!(summary.copied.is_empty());
    assert!(!out.exists());
    Ok(())
}

#[test]
fn copying_file_onto_itself_fails_without_damage() -> Result<(), Box<dyn std::error::Error>> {
    let td = tempdir()?;
    fs::write(td.path().join("a.txt"), "precious")?;

    let err = move_into(&Config::new(td.path()), "a.txt", Some(td.path())).unwrap_err();

    assert!(matches!(err, SynthError::SameFile { .. }));
    assert_eq!(fs::read_to_string(td.path().join("a.txt"))?, "precious");
    Ok(())
}

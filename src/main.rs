use std::process::ExitCode;

use synth_fs::output as out;

mod app;
mod cli;
mod logging;

fn main() -> ExitCode {
    let args = cli::parse();
    match app::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            out::print_error(&format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}

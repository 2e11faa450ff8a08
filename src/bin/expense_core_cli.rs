use std::process::ExitCode;

use expense_core::{cli, init};

fn main() -> ExitCode {
    init();
    if let Err(err) = cli::run_cli() {
        cli::output::error(err);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

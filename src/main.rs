//! spritestack - Command-line tool for generating sprite sheets and stylesheets

use std::process::ExitCode;

use spritestack::cli;

fn main() -> ExitCode {
    cli::run()
}

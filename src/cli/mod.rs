use anyhow::Result;

pub use args::{Arguments, OutputFormat};
pub use exit_status::ExitStatus;

mod args;
mod exit_status;
mod report;
mod run;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    run::run(args)
}

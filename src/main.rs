use std::io;
use std::process::ExitCode;

use opgen::{GenError, Generator};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<std::ffi::OsString> = std::env::args_os().collect();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match Generator::new().run(&args, &mut out) {
        Ok(report) => {
            log::debug!(
                "generated {} of {} catalog variants for {}",
                report.matched,
                report.catalog_size,
                report.mnemonic
            );
            ExitCode::SUCCESS
        }
        // Usage line already went to stdout
        Err(err @ GenError::Usage { .. }) => ExitCode::from(err.exit_code()),
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::from(err.exit_code())
        }
    }
}

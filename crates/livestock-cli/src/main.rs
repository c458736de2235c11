//! Livestock statistics preprocessor CLI.

use clap::Parser;
use livestock_cli::cli::Cli;
use livestock_cli::commands::run_prepare;
use livestock_cli::logging::init_logging;
use livestock_cli::summary::print_summary;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    if let Err(error) = init_logging(&cli.log_config()) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run_prepare(&cli.prepare) {
        Ok(run) => {
            print_summary(&run);
            0
        }
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

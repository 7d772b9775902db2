use skynet_core::logging;

mod cli;

use crate::cli::CliCommand;

#[tokio::main]
async fn main() {
    // File logging when possible; stderr otherwise.
    logging::init();

    if let Err(err) = CliCommand::run_from_args().await {
        eprintln!("skynet error: {:#}", err);
        std::process::exit(1);
    }
}

//! SPR CLI - Command line tool for searching and summarizing the shogi player roster.

use clap::Parser;
use log::error;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "spr-cli",
    version,
    about = "Shogi player roster: ages, promotion ages and seat order"
)]
struct Cli {
    #[command(subcommand)]
    command: spr_cmd::Command,
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    match spr_cmd::run(cli.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:?}");
            eprintln!("{}", spr_cmd::failure_message(&err));
            ExitCode::FAILURE
        }
    }
}

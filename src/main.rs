use clap::Parser;

mod cli;
mod commands;
mod domain;
mod report;
mod services;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = cli::Cli::parse();
    commands::handle_tally(&cli)
}

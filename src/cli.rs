use clap::Parser;
use std::path::PathBuf;

pub const DEFAULT_INPUT: &str = "sample2.txt";

#[derive(Parser, Debug)]
#[command(name = "levelcheck", version, about = "Reactor report safety tally")]
pub struct Cli {
    #[arg(
        default_value = DEFAULT_INPUT,
        help = "Input file, one report of whitespace-separated levels per line"
    )]
    pub input: PathBuf,
    #[arg(long, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(long, help = "Print one evaluation row per report before the summary")]
    pub details: bool,
}

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "addrbook")]
#[command(about = "Interactive address book assistant", long_about = None)]
pub struct Cli {
    /// Address book file (overrides the configured data_file)
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Verbose logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

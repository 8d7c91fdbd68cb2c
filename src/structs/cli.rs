use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser)]
#[clap(name = "docify")]
#[clap(about = "AI documentation assistant client", long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}

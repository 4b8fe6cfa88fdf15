use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "proofpal")]
#[command(author, version, about = "Telegram bot that archives proof-of-delivery photos", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the bot in normal mode
    Run {
        /// Use webhook mode instead of long polling
        #[arg(long)]
        webhook: bool,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

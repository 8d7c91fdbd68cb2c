use clap::Subcommand;
use crate::config::constants::DEFAULT_DOC_MAX_LENGTH;

#[derive(Subcommand)]
pub enum Commands {
    /// Create a sample configuration file
    Init,
    /// Detect the programming language of a file from its extension
    Detect {
        file: String,
    },
    /// Save the backend URL and API key
    Settings {
        #[clap(short, long)]
        url: String,
        #[clap(short, long)]
        key: String,
    },
    /// Send a short generate request to verify the backend is reachable
    Test,
    /// Start an interactive session (chat, documentation, session state)
    Session {
        file: Option<String>,
        #[clap(short, long)]
        language: Option<String>,
    },
    /// Generate documentation for a file in one shot
    Doc {
        file: String,
        #[clap(short, long)]
        language: Option<String>,
        #[clap(short, long)]
        output: Option<String>,
        #[clap(long, default_value_t = DEFAULT_DOC_MAX_LENGTH)]
        max_length: u32,
        #[clap(long)]
        no_examples: bool,
        #[clap(long)]
        brief: bool,
    },
}

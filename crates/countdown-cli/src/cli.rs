use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "countdowns")]
#[command(about = "Countdowns to the dates that matter, kept in a spreadsheet", long_about = None)]
#[command(version)]
pub struct Cli {
    /// URL of the spreadsheet web app (or set COUNTDOWNS_ENDPOINT env var)
    #[arg(long, value_name = "URL", env = "COUNTDOWNS_ENDPOINT")]
    pub endpoint: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

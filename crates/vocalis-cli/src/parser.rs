//! Top-level CLI parser with global options.

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface definition for the vocalis studio tool.
#[derive(Parser)]
#[command(name = "vocalis")]
#[command(about = "Generate speech, voice conversions and sound effects")]
#[command(version)]
pub struct Cli {
    /// Base URL of the vocalis backend API
    #[arg(long = "api-url", env = "VOCALIS_API_URL", global = true)]
    pub api_url: Option<String>,

    /// Bearer token for authenticated requests
    #[arg(long = "token", env = "VOCALIS_API_TOKEN", global = true)]
    pub token: Option<String>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_args_parse() {
        let cli = Cli::parse_from([
            "vocalis",
            "--api-url",
            "https://studio.example/api",
            "--verbose",
            "say",
            "hello",
            "--voice",
            "v1",
        ]);
        assert!(cli.verbose);
        assert_eq!(cli.api_url.as_deref(), Some("https://studio.example/api"));
    }
}

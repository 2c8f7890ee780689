//! Command-line interface for the tic-tac-toe terminal UI.

use clap::Parser;
use std::path::PathBuf;

/// Two-player tic-tac-toe with move history and time travel
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe with move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to TOML configuration file (defaults are used if it is missing)
    #[arg(short, long, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Disable the terminal bell regardless of configuration
    #[arg(long)]
    pub mute: bool,

    /// Log file (the terminal itself is owned by the UI)
    #[arg(long, default_value = "tictactoe_tui.log")]
    pub log_file: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["tictactoe"]);
        assert_eq!(cli.config, PathBuf::from("tictactoe.toml"));
        assert!(!cli.mute);
        assert_eq!(cli.log_file, PathBuf::from("tictactoe_tui.log"));
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::parse_from(["tictactoe", "-c", "alt.toml", "--mute", "--log-file", "/tmp/t.log"]);
        assert_eq!(cli.config, PathBuf::from("alt.toml"));
        assert!(cli.mute);
        assert_eq!(cli.log_file, PathBuf::from("/tmp/t.log"));
    }
}

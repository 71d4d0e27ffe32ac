//! Command-line interface for tictac.

use clap::{Parser, Subcommand};

/// Two-player tic-tac-toe at a text prompt
#[derive(Parser, Debug)]
#[command(name = "tictac")]
#[command(about = "Two-player tic-tac-toe at a text prompt", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (optional)
    #[arg(short, long, global = true, default_value = "tictac.toml")]
    pub config: std::path::PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play interactively on stdin/stdout
    Play,

    /// Play a fixed list of moves and print the result
    Replay {
        /// Comma-separated cell indices, e.g. 0,4,1,5,2
        #[arg(long, value_delimiter = ',', required = true)]
        moves: Vec<String>,

        /// Print the final game snapshot as JSON instead of the transcript
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_play() {
        let cli = Cli::parse_from(["tictac"]);
        assert_eq!(cli.command, None);
        assert_eq!(cli.config, std::path::PathBuf::from("tictac.toml"));
    }

    #[test]
    fn test_replay_moves() {
        let cli = Cli::parse_from(["tictac", "replay", "--moves", "0,4,1", "--json"]);
        assert_eq!(
            cli.command,
            Some(Command::Replay {
                moves: vec!["0".to_string(), "4".to_string(), "1".to_string()],
                json: true,
            })
        );
    }

    #[test]
    fn test_config_flag_is_global() {
        let cli = Cli::parse_from(["tictac", "play", "--config", "other.toml"]);
        assert_eq!(cli.command, Some(Command::Play));
        assert_eq!(cli.config, std::path::PathBuf::from("other.toml"));
    }
}

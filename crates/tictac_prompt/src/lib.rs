//! Text prompt front end for two-player tic-tac-toe.
//!
//! # Architecture
//!
//! - **Config**: optional TOML file with the log filter and cell glyphs
//! - **View**: renders the board after each accepted move
//! - **Session**: async prompt loop over any line-oriented byte streams
//!
//! # Example
//!
//! ```no_run
//! use tictac_core::Game;
//! use tictac_prompt::{PromptConfig, Session, TranscriptView};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = PromptConfig::default();
//! let game = Game::with_view(TranscriptView::new(config.glyphs().clone()));
//! let input = tokio::io::BufReader::new(tokio::io::stdin());
//! let mut session = Session::new(input, tokio::io::stdout(), game);
//! session.run().await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod session;
mod view;

pub use config::{ConfigError, PromptConfig};
pub use session::{
    MOVE_PROMPT, RESTART_PROMPT, RoundOutcome, START_PROMPT, Session, SessionError, replay, replay_script,
};
pub use view::TranscriptView;

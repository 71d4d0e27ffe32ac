//! Prompt loop driving a game from lines of text.
//!
//! The session owns the input stream for its whole life and only yields while
//! waiting for the next line. Game state is touched only after a line has
//! arrived, and each round runs under a [`Round`](tictac_core::Round) guard so
//! the game is stopped however the round is left.

use crate::view::TranscriptView;
use derive_more::{Display, Error, From};
use tictac_core::{Game, Glyphs, Player};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, Lines};
use tracing::{debug, info, instrument};

/// Prompt shown before the first round.
pub const START_PROMPT: &str = "Press ENTER to start:\n";

/// Prompt shown before every move.
pub const MOVE_PROMPT: &str = "Cell index: ";

/// Prompt shown after a round ends.
pub const RESTART_PROMPT: &str = "Do you want to restart? [y/any]:\n";

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// A player completed a line.
    Won(Player),
    /// The turn limit ran out with no line completed.
    Draw,
    /// Input closed before the round finished.
    Abandoned,
}

/// Failure talking to the terminal.
#[derive(Debug, Display, Error, From)]
pub enum SessionError {
    /// Reading input or writing output failed.
    #[display("Terminal I/O failed: {}", _0)]
    Io(#[error(source)] std::io::Error),

    /// The final snapshot could not be serialized.
    #[display("Snapshot serialization failed: {}", _0)]
    Json(#[error(source)] serde_json::Error),
}

/// Line-oriented input paired with an output stream.
#[derive(Debug)]
struct Terminal<R, W> {
    lines: Lines<R>,
    output: W,
}

impl<R, W> Terminal<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    async fn say(&mut self, text: impl AsRef<str>) -> Result<(), SessionError> {
        self.output.write_all(text.as_ref().as_bytes()).await?;
        self.output.write_all(b"\n").await?;
        self.output.flush().await?;
        Ok(())
    }

    /// Writes `query` and waits for a line. `None` once input is closed.
    async fn ask(&mut self, query: &str) -> Result<Option<String>, SessionError> {
        self.output.write_all(query.as_bytes()).await?;
        self.output.flush().await?;
        Ok(self.lines.next_line().await?)
    }
}

/// Interactive tic-tac-toe over a pair of byte streams.
#[derive(Debug)]
pub struct Session<R, W> {
    terminal: Terminal<R, W>,
    game: Game<TranscriptView>,
}

impl<R, W> Session<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    /// Creates a session reading moves from `input` and writing to `output`.
    pub fn new(input: R, output: W, game: Game<TranscriptView>) -> Self {
        Self {
            terminal: Terminal {
                lines: input.lines(),
                output,
            },
            game,
        }
    }

    /// Returns the game being played.
    pub fn game(&self) -> &Game<TranscriptView> {
        &self.game
    }

    /// Returns the output stream.
    pub fn output(&self) -> &W {
        &self.terminal.output
    }

    /// Plays rounds until the user declines a restart or input closes.
    ///
    /// Returns the outcome of every round played. The game is `Ended` when
    /// this returns, whether or not it returns an error.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Io`] if the terminal cannot be read or written.
    #[instrument(skip(self))]
    pub async fn run(&mut self) -> Result<Vec<RoundOutcome>, SessionError> {
        let mut outcomes = Vec::new();
        let result = self.play_rounds(&mut outcomes).await;
        self.game.stop();
        result?;

        self.terminal.say("\nLeaving...").await?;
        Ok(outcomes)
    }

    /// Greets the user, then plays rounds for as long as they restart.
    async fn play_rounds(&mut self, outcomes: &mut Vec<RoundOutcome>) -> Result<(), SessionError> {
        self.terminal.say("Starting...").await?;
        if self.terminal.ask(START_PROMPT).await?.is_none() {
            return Ok(());
        }
        self.terminal.say("Started.").await?;

        loop {
            let outcome = self.play_round().await?;
            info!(?outcome, "Round finished");
            outcomes.push(outcome);

            if outcome == RoundOutcome::Abandoned {
                return Ok(());
            }

            match self.terminal.ask(RESTART_PROMPT).await? {
                Some(answer) if answer.trim() == "y" => {
                    self.terminal.say("Re-started.").await?;
                    self.game.reset();
                }
                _ => return Ok(()),
            }
        }
    }

    /// Collects moves until the round is won, drawn or abandoned.
    #[instrument(skip(self))]
    async fn play_round(&mut self) -> Result<RoundOutcome, SessionError> {
        let terminal = &mut self.terminal;
        let mut round = self.game.begin_round();

        loop {
            let Some(raw) = terminal.ask(MOVE_PROMPT).await? else {
                debug!(turn = round.turn(), "Input closed mid-round");
                return Ok(RoundOutcome::Abandoned);
            };

            let player = round.active_player();
            terminal
                .say(format!(
                    "Turn: {} | Player: {} | Cell: {}",
                    round.turn(),
                    player,
                    raw.trim()
                ))
                .await?;

            match round.try_play_input(&raw) {
                Ok(cell) => {
                    for frame in round.view_mut().take_frames() {
                        terminal.say(frame).await?;
                    }
                    terminal.say("").await?;

                    if round.has_won(cell) {
                        terminal.say(format!("Player {} has won.\n", player)).await?;
                        return Ok(RoundOutcome::Won(player));
                    }
                }
                Err(error) => {
                    debug!(%error, "Move rejected");
                    terminal.say("Illegal or invalid turn.").await?;
                    terminal.say("").await?;
                }
            }

            if !round.is_running() {
                terminal.say("Game has finished.\n").await?;
                return Ok(RoundOutcome::Draw);
            }
        }
    }
}

/// Builds session input that presses ENTER and then plays `moves` in order.
pub fn replay_script<S: AsRef<str>>(moves: &[S]) -> String {
    let mut script = String::from("\n");
    for mv in moves {
        script.push_str(mv.as_ref().trim());
        script.push('\n');
    }
    script
}

/// Plays `moves` through a session without a user at the keyboard.
///
/// The first move after a round ends answers the restart prompt, so only a
/// `y` in that position starts another round. With `json` set, the transcript is discarded and
/// the final [`GameSnapshot`](tictac_core::GameSnapshot) is written to
/// `output` instead.
///
/// # Errors
///
/// Returns [`SessionError`] if `output` cannot be written or the snapshot
/// cannot be serialized.
#[instrument(skip(moves, glyphs, output), fields(moves = moves.len()))]
pub async fn replay<S, W>(
    moves: &[S],
    glyphs: Glyphs,
    json: bool,
    mut output: W,
) -> Result<Vec<RoundOutcome>, SessionError>
where
    S: AsRef<str>,
    W: AsyncWrite + Unpin,
{
    let script = replay_script(moves);
    let game = Game::with_view(TranscriptView::new(glyphs));

    if !json {
        let mut session = Session::new(script.as_bytes(), output, game);
        return session.run().await;
    }

    let mut session = Session::new(script.as_bytes(), tokio::io::sink(), game);
    let outcomes = session.run().await?;
    let mut document = session.game().snapshot().to_json()?;
    document.push('\n');
    output.write_all(document.as_bytes()).await?;
    output.flush().await?;
    Ok(outcomes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replay_script() {
        assert_eq!(replay_script(&["0", " 4 ", "x"]), "\n0\n4\nx\n");
        assert_eq!(replay_script::<&str>(&[]), "\n");
    }
}

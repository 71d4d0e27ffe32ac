//! Board view that queues rendered boards for the terminal.

use tictac_core::{Board, BoardView, Glyphs};
use tracing::trace;

/// Renders each accepted board with the configured glyphs.
///
/// Frames queue up until the session drains them with
/// [`TranscriptView::take_frames`] and writes them out.
#[derive(Debug, Clone, Default)]
pub struct TranscriptView {
    glyphs: Glyphs,
    frames: Vec<String>,
}

impl TranscriptView {
    /// Creates a view drawing cells with `glyphs`.
    pub fn new(glyphs: Glyphs) -> Self {
        Self {
            glyphs,
            frames: Vec::new(),
        }
    }

    /// Removes and returns the frames rendered since the last call.
    pub fn take_frames(&mut self) -> Vec<String> {
        std::mem::take(&mut self.frames)
    }
}

impl BoardView for TranscriptView {
    fn board_changed(&mut self, board: &Board) {
        let frame = board.render(&self.glyphs);
        trace!(%frame, "Board rendered");
        self.frames.push(frame);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictac_core::Game;

    #[test]
    fn test_frames_drain() {
        let mut game = Game::with_view(TranscriptView::new(Glyphs::new("-", "x", "o")));
        game.play_turn(0);
        game.play_turn(8);

        let frames = game.view_mut().take_frames();
        assert_eq!(frames, vec!["x|-|-\n-|-|-\n-|-|-", "x|-|-\n-|-|-\n-|-|o"]);
        assert!(game.view_mut().take_frames().is_empty());
    }
}

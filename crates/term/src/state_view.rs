//! StateView: maps a `core::StackSnapshot` into styled console lines.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::StackSnapshot;
use crate::style::{shape_color, Span, SpanStyle, ViewLine};
use crate::types::{MenuChoice, Piece};

/// Shown in place of the tokens when a collection holds nothing.
pub const EMPTY_PLACEHOLDER: &str = "(empty)";

pub const PROMPT: &str = "Choice: ";

const HEADER: &str = "===== CURRENT STATE =====";
const FOOTER: &str = "=========================";
const QUEUE_LABEL: &str = "Piece queue:\t";
const RESERVE_LABEL: &str = "Reserve stack (top -> base):\t";

const FRAME: SpanStyle = SpanStyle::PLAIN.bold();
const LABEL: SpanStyle = SpanStyle::PLAIN;
const PLACEHOLDER: SpanStyle = SpanStyle::PLAIN.dim();

/// Builds the state block and the menu.
#[derive(Debug, Clone, Copy, Default)]
pub struct StateView;

impl StateView {
    pub fn new() -> Self {
        Self
    }

    /// State block: header, queue front-to-back, reserve top-to-base, footer.
    pub fn render(&self, snap: &StackSnapshot) -> Vec<ViewLine> {
        vec![
            Vec::new(),
            vec![Span::styled(HEADER, FRAME)],
            self.pieces_line(QUEUE_LABEL, &snap.queue),
            self.pieces_line(RESERVE_LABEL, &snap.reserve),
            vec![Span::styled(FOOTER, FRAME)],
            Vec::new(),
        ]
    }

    fn pieces_line(&self, label: &str, pieces: &[Piece]) -> ViewLine {
        let mut line = Vec::with_capacity(pieces.len() * 2 + 1);
        line.push(Span::styled(label, LABEL));
        if pieces.is_empty() {
            line.push(Span::styled(EMPTY_PLACEHOLDER, PLACEHOLDER));
            return line;
        }
        for (i, piece) in pieces.iter().enumerate() {
            if i > 0 {
                line.push(Span::plain(" "));
            }
            line.push(piece_span(piece));
        }
        line
    }

    /// Menu entries in display order. The prompt is written separately.
    pub fn menu(&self) -> Vec<ViewLine> {
        MenuChoice::MENU_ORDER
            .iter()
            .map(|choice| vec![Span::plain(format!("{} - {}", choice.code(), choice.label()))])
            .collect()
    }
}

/// `[S id]` token colored by shape.
pub fn piece_span(piece: &Piece) -> Span {
    Span::styled(piece.to_string(), SpanStyle::fg(shape_color(piece.shape())).bold())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameState;
    use crate::style::line_text;

    fn text(lines: &[ViewLine]) -> Vec<String> {
        lines.iter().map(|l| line_text(l)).collect()
    }

    #[test]
    fn renders_queue_tokens_front_to_back() {
        let game = GameState::new(3);
        let lines = text(&StateView::new().render(&game.snapshot()));

        let queue_line = &lines[2];
        assert!(queue_line.starts_with(QUEUE_LABEL));
        let expected: Vec<String> = game.queue().iter().map(|p| p.to_string()).collect();
        assert_eq!(&queue_line[QUEUE_LABEL.len()..], expected.join(" "));
    }

    #[test]
    fn empty_reserve_uses_placeholder() {
        let game = GameState::new(3);
        let lines = text(&StateView::new().render(&game.snapshot()));
        assert_eq!(lines[3], format!("{}{}", RESERVE_LABEL, EMPTY_PLACEHOLDER));
    }

    #[test]
    fn reserve_is_top_to_base() {
        let mut game = GameState::new(3);
        game.reserve_front();
        game.reserve_front();
        let lines = text(&StateView::new().render(&game.snapshot()));

        let ids: Vec<String> = game.reserve().iter().map(|p| p.to_string()).collect();
        assert!(ids[0].ends_with(" 1]"));
        assert_eq!(lines[3], format!("{}{}", RESERVE_LABEL, ids.join(" ")));
    }

    #[test]
    fn menu_lists_every_choice_with_exit_last() {
        let menu = text(&StateView::new().menu());
        assert_eq!(menu.len(), 6);
        assert_eq!(menu[0], "1 - play front piece");
        assert_eq!(menu[4], "5 - swap 3 front queue elements with 3 stack elements");
        assert_eq!(menu[5], "0 - exit");
    }
}

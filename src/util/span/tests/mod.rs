//! Span 单元测试
//!
//! 测试源位置跟踪的 Position 和 Span

use crate::util::span::{Position, Span};

#[cfg(test)]
mod position_tests {
    use super::*;

    #[test]
    fn test_position_start() {
        let pos = Position::start();
        assert_eq!((pos.line, pos.column, pos.offset), (1, 1, 0));
        assert_eq!(pos.to_string(), "1:1");
    }

    #[test]
    fn test_advance_counts_bytes_and_columns() {
        let mut pos = Position::start();
        pos.advance('a');
        pos.advance('é');
        assert_eq!(pos, Position::with_offset(1, 3, 3));
    }

    #[test]
    fn test_advance_over_newline() {
        let mut pos = Position::start();
        for c in "ab\nc".chars() {
            pos.advance(c);
        }
        assert_eq!(pos, Position::with_offset(2, 2, 4));
    }
}

#[cfg(test)]
mod span_tests {
    use super::*;

    #[test]
    fn test_span_len_and_text() {
        let source = "let x";
        let span = Span::new(Position::start(), Position::with_offset(1, 4, 3));
        assert_eq!(span.len(), 3);
        assert!(!span.is_empty());
        assert_eq!(span.text(source), "let");
    }

    #[test]
    fn test_span_text_out_of_range() {
        let span = Span::new(Position::start(), Position::with_offset(1, 9, 8));
        assert_eq!(span.text("abc"), "");
    }

    #[test]
    fn test_span_dummy() {
        let span = Span::dummy();
        assert!(span.is_dummy());
        assert!(span.is_empty());
    }

    #[test]
    fn test_span_display() {
        let span = Span::new(Position::with_offset(1, 2, 1), Position::with_offset(1, 5, 4));
        assert_eq!(span.to_string(), "[1:2 - 1:5]");
    }
}

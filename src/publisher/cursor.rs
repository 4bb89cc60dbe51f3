use crate::config::types::RemainderPolicy;
use std::ops::Range;

/// Tracks where the next batch starts within the loaded trips.
#[derive(Debug, Clone)]
pub struct BatchCursor {
    position: usize,
    batch_size: usize,
    len: usize,
    remainder: RemainderPolicy,
}

impl BatchCursor {
    pub fn new(len: usize, batch_size: usize, remainder: RemainderPolicy) -> Self {
        Self {
            position: 0,
            batch_size: batch_size.max(1),
            len,
            remainder,
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Window for the next batch, clamped to the collection length.
    pub fn window(&self) -> Range<usize> {
        let end = self.position.saturating_add(self.batch_size).min(self.len);
        self.position.min(end)..end
    }

    /// Move past the current window, wrapping to the start per the remainder policy.
    pub fn advance(&mut self) {
        self.position = self.position.saturating_add(self.batch_size);

        let wrap = match self.remainder {
            // Reset as soon as the following window would reach the end.
            RemainderPolicy::Skip => self.position.saturating_add(self.batch_size) >= self.len,
            RemainderPolicy::Send => self.position >= self.len,
        };

        if wrap {
            self.position = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn windows(cursor: &mut BatchCursor, count: usize) -> Vec<Range<usize>> {
        let mut out = Vec::new();
        for _ in 0..count {
            out.push(cursor.window());
            cursor.advance();
        }
        out
    }

    #[test]
    fn test_skip_never_sends_short_tail() {
        let mut cursor = BatchCursor::new(12, 5, RemainderPolicy::Skip);
        assert_eq!(windows(&mut cursor, 4), vec![0..5, 5..10, 0..5, 5..10]);
    }

    #[test]
    fn test_send_includes_short_tail() {
        let mut cursor = BatchCursor::new(12, 5, RemainderPolicy::Send);
        assert_eq!(windows(&mut cursor, 5), vec![0..5, 5..10, 10..12, 0..5, 5..10]);
    }

    #[test]
    fn test_skip_covers_long_collection_in_order() {
        let mut cursor = BatchCursor::new(23, 5, RemainderPolicy::Skip);
        assert_eq!(
            windows(&mut cursor, 6),
            vec![0..5, 5..10, 10..15, 15..20, 0..5, 5..10]
        );
    }

    #[test]
    fn test_skip_resets_before_exact_final_window() {
        // 5 + 5 >= 10 fires after the first batch, so [5, 10) is never reached
        let mut cursor = BatchCursor::new(10, 5, RemainderPolicy::Skip);
        assert_eq!(windows(&mut cursor, 3), vec![0..5, 0..5, 0..5]);
    }

    #[test]
    fn test_send_exact_multiple() {
        let mut cursor = BatchCursor::new(10, 5, RemainderPolicy::Send);
        assert_eq!(windows(&mut cursor, 3), vec![0..5, 5..10, 0..5]);
    }

    #[test]
    fn test_short_collection_is_clamped() {
        for policy in [RemainderPolicy::Skip, RemainderPolicy::Send] {
            let mut cursor = BatchCursor::new(3, 5, policy);
            assert_eq!(windows(&mut cursor, 3), vec![0..3, 0..3, 0..3]);
        }
    }

    #[test]
    fn test_huge_batch_size_does_not_overflow() {
        for policy in [RemainderPolicy::Skip, RemainderPolicy::Send] {
            let mut cursor = BatchCursor::new(12, usize::MAX, policy);
            assert_eq!(windows(&mut cursor, 3), vec![0..12, 0..12, 0..12]);
            assert_eq!(cursor.position(), 0);
        }
    }

    #[test]
    fn test_position_tracks_advance() {
        let mut cursor = BatchCursor::new(30, 5, RemainderPolicy::Skip);
        assert_eq!(cursor.position(), 0);
        cursor.advance();
        assert_eq!(cursor.position(), 5);
        cursor.advance();
        assert_eq!(cursor.position(), 10);
    }
}

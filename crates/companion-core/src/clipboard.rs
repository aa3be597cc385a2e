//! "Copied!" acknowledgement state for code block copy buttons.

use std::time::Duration;

/// How long the acknowledgement stays visible by default.
pub const DEFAULT_FEEDBACK: Duration = Duration::from_millis(2000);

/// Tracks whether a copy acknowledgement is showing.
///
/// Every acknowledgement hands out a ticket. Only the newest ticket can
/// clear the flag, so a timer left over from an earlier copy does not hide
/// the acknowledgement of a later one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyFeedback {
    copied: bool,
    generation: u64,
}

impl CopyFeedback {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_copied(&self) -> bool {
        self.copied
    }

    /// Show the acknowledgement and return the ticket that may expire it.
    pub fn acknowledge(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.copied = true;
        self.generation
    }

    /// Hide the acknowledgement if `ticket` is still the newest one.
    ///
    /// Returns whether anything changed.
    pub fn expire(&mut self, ticket: u64) -> bool {
        if self.copied && ticket == self.generation {
            self.copied = false;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acknowledge_then_expire() {
        let mut feedback = CopyFeedback::new();
        assert!(!feedback.is_copied());

        let ticket = feedback.acknowledge();
        assert!(feedback.is_copied());
        assert!(feedback.expire(ticket));
        assert!(!feedback.is_copied());
    }

    #[test]
    fn test_stale_ticket_is_ignored() {
        let mut feedback = CopyFeedback::new();
        let first = feedback.acknowledge();
        let second = feedback.acknowledge();

        assert!(!feedback.expire(first));
        assert!(feedback.is_copied());
        assert!(feedback.expire(second));
    }

    #[test]
    fn test_double_expire_is_noop() {
        let mut feedback = CopyFeedback::new();
        let ticket = feedback.acknowledge();
        assert!(feedback.expire(ticket));
        assert!(!feedback.expire(ticket));
    }

    #[test]
    fn test_default_feedback_is_two_seconds() {
        assert_eq!(DEFAULT_FEEDBACK.as_secs(), 2);
    }
}

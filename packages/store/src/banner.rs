//! Transient error banner state.
//!
//! A banner shows one message for a fixed window. Showing a new message
//! replaces the text and hands out a new ticket; the timer that hides the
//! banner presents its ticket to [`Banner::expire`], so a stale timer from an
//! earlier message cannot hide a newer one.

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Banner {
    message: Option<String>,
    ticket: u64,
}

impl Banner {
    /// Display `message`; returns the ticket the hiding timer must present.
    pub fn show(&mut self, message: impl Into<String>) -> u64 {
        self.ticket += 1;
        self.message = Some(message.into());
        self.ticket
    }

    /// Hide the banner if `ticket` belongs to the message still on screen.
    pub fn expire(&mut self, ticket: u64) {
        if ticket == self.ticket {
            self.message = None;
        }
    }

    /// Dismiss immediately.
    pub fn dismiss(&mut self) {
        self.message = None;
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn is_visible(&self) -> bool {
        self.message.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_then_expire() {
        let mut banner = Banner::default();
        assert!(!banner.is_visible());

        let ticket = banner.show("Erreur");
        assert_eq!(banner.message(), Some("Erreur"));

        banner.expire(ticket);
        assert!(!banner.is_visible());
    }

    #[test]
    fn test_stale_timer_keeps_newer_message() {
        let mut banner = Banner::default();
        let first = banner.show("first");
        let second = banner.show("second");
        assert_eq!(banner.message(), Some("second"));

        banner.expire(first);
        assert_eq!(banner.message(), Some("second"));

        banner.expire(second);
        assert!(banner.message().is_none());
    }

    #[test]
    fn test_dismiss() {
        let mut banner = Banner::default();
        let ticket = banner.show("x");
        banner.dismiss();
        assert!(!banner.is_visible());
        // Late timer is harmless
        banner.expire(ticket);
        assert!(!banner.is_visible());
    }
}

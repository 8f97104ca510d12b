//! Error Banner State Machine
//!
//! Holds at most one message. Every display gets a fresh ticket; a dismiss
//! timer only clears the banner when its ticket is still the current one, so
//! a newer error restarts the countdown instead of being cut short.

use std::time::Duration;

use super::message::ErrorMessage;

/// How long a message stays up without user interaction
pub const ERROR_DISMISS_DELAY: Duration = Duration::from_millis(3000);

/// Identifies one display of the banner
pub type BannerTicket = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BannerState {
    #[default]
    Idle,
    Showing {
        message: ErrorMessage,
        ticket: BannerTicket,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorBanner {
    state: BannerState,
    next_ticket: BannerTicket,
}

impl ErrorBanner {
    pub fn state(&self) -> BannerState {
        self.state
    }

    /// Currently displayed message, `ErrorMessage::None` when idle
    pub fn message(&self) -> ErrorMessage {
        match self.state {
            BannerState::Idle => ErrorMessage::None,
            BannerState::Showing { message, .. } => message,
        }
    }

    pub fn is_showing(&self) -> bool {
        matches!(self.state, BannerState::Showing { .. })
    }

    /// Overwrite whatever is shown and return the ticket for its timer.
    ///
    /// Showing `ErrorMessage::None` is the same as dismissing.
    pub fn show(&mut self, message: ErrorMessage) -> BannerTicket {
        self.next_ticket += 1;
        let ticket = self.next_ticket;
        self.state = if message.is_none() {
            BannerState::Idle
        } else {
            BannerState::Showing { message, ticket }
        };
        ticket
    }

    pub fn dismiss(&mut self) {
        self.state = BannerState::Idle;
    }

    /// Timer fired for `ticket`; returns whether the banner was cleared
    pub fn expire(&mut self, ticket: BannerTicket) -> bool {
        match self.state {
            BannerState::Showing { ticket: current, .. } if current == ticket => {
                self.state = BannerState::Idle;
                true
            }
            _ => false,
        }
    }
}

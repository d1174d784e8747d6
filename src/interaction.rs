use std::time::Duration;

use thiserror::Error;

/// How long the copy confirmation stays up after the latest copy.
pub const TOAST_DURATION: Duration = Duration::from_millis(3000);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("clipboard is not available in this browser context")]
    Unsupported,
    #[error("clipboard write rejected: {0}")]
    Rejected(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Picking a nav destination always leaves the menu closed.
    pub fn close(&mut self) {
        self.open = false;
    }
}

/// Proof of a particular `show`. Only the newest ticket can hide the toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastTicket(u64);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ToastState {
    visible: bool,
    generation: u64,
}

impl ToastState {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn show(&mut self) -> ToastTicket {
        self.generation = self.generation.wrapping_add(1);
        self.visible = true;
        ToastTicket(self.generation)
    }

    /// Hide the toast if `ticket` is from the latest `show`. Returns whether
    /// it was hidden.
    pub fn dismiss(&mut self, ticket: ToastTicket) -> bool {
        if ticket.0 != self.generation || !self.visible {
            return false;
        }
        self.visible = false;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_toggle_is_involution() {
        for start_open in [false, true] {
            let mut menu = MenuState::default();
            if start_open {
                menu.toggle();
            }
            let before = menu.is_open();
            menu.toggle();
            assert_ne!(menu.is_open(), before);
            menu.toggle();
            assert_eq!(menu.is_open(), before);
        }
    }

    #[test]
    fn test_selecting_destination_closes_menu() {
        let mut menu = MenuState::default();
        menu.toggle();
        assert!(menu.is_open());
        menu.close();
        assert!(!menu.is_open());

        // already closed stays closed
        menu.close();
        assert!(!menu.is_open());
    }

    #[test]
    fn test_toast_auto_dismiss() {
        let mut toast = ToastState::default();
        assert!(!toast.is_visible());

        let ticket = toast.show();
        assert!(toast.is_visible());
        assert!(toast.dismiss(ticket));
        assert!(!toast.is_visible());

        // a late duplicate dismissal is a no-op
        assert!(!toast.dismiss(ticket));
    }

    #[test]
    fn test_second_copy_restarts_window() {
        let mut toast = ToastState::default();
        let first = toast.show();
        let second = toast.show();

        // the first copy's timer fires while the second window is open
        assert!(!toast.dismiss(first));
        assert!(toast.is_visible());

        assert!(toast.dismiss(second));
        assert!(!toast.is_visible());
    }

    #[test]
    fn test_toast_duration_is_three_seconds() {
        assert_eq!(TOAST_DURATION.as_millis(), 3000);
    }
}

use std::time::Duration;

use leptos::prelude::*;

/// A single pending timeout owned by the current reactive owner.
///
/// Starting a new timeout clears the previous one, and the owner's cleanup
/// clears whatever is still pending when the view unmounts.
#[derive(Debug, Clone, Copy)]
pub struct TimerSlot {
    handle: StoredValue<Option<TimeoutHandle>>,
}

impl TimerSlot {
    pub fn new() -> Self {
        let slot = Self {
            handle: StoredValue::new(None),
        };
        on_cleanup(move || slot.cancel());
        slot
    }

    pub fn start(self, delay: Duration, cb: impl FnOnce() + 'static) {
        self.cancel();
        match set_timeout_with_handle(cb, delay) {
            Ok(handle) => {
                self.handle.try_update_value(|h| *h = Some(handle));
            }
            Err(err) => log::warn!("couldn't schedule timeout: {err:?}"),
        }
    }

    pub fn cancel(self) {
        if let Some(handle) = self.handle.try_update_value(Option::take).flatten() {
            handle.clear();
        }
    }
}

impl Default for TimerSlot {
    fn default() -> Self {
        Self::new()
    }
}

use std::time::Duration;

use leptos::prelude::*;

use super::timer::TimerSlot;
use crate::typing::Typewriter;

/// Drives `typewriter` on a timer once the view is mounted and returns the
/// text to display. The pending tick is dropped with the view.
pub fn use_typewriter(typewriter: Typewriter) -> ReadSignal<String> {
    let (text, set_text) = signal(typewriter.text().to_string());
    let first = typewriter.initial_delay();
    let machine = StoredValue::new(typewriter);
    let slot = TimerSlot::new();

    // effects only run in the browser, so SSR renders the empty prefix
    Effect::new(move |_| schedule_tick(machine, slot, set_text, first));

    text
}

fn schedule_tick(
    machine: StoredValue<Typewriter>,
    slot: TimerSlot,
    set_text: WriteSignal<String>,
    delay: Duration,
) {
    slot.start(delay, move || {
        let Some((shown, next)) = machine.try_update_value(|m| {
            let next = m.tick();
            (m.text().to_string(), next)
        }) else {
            return;
        };
        if set_text.try_set(shown).is_some() {
            // signal already disposed
            return;
        }
        schedule_tick(machine, slot, set_text, next);
    });
}

use std::sync::Once;

use leptos::{html, prelude::*};
use leptos_use::{use_intersection_observer_with_options, UseIntersectionObserverOptions};
use wasm_bindgen::JsValue;

use crate::reveal::{DegradePolicy, RegionId, RevealConfig, RevealRegistry, Transition};

#[derive(Debug, Clone, Copy)]
pub struct RevealScope {
    registry: StoredValue<RevealRegistry>,
    config: RevealConfig,
}

impl RevealScope {
    fn register(self) -> Option<RegionId> {
        self.registry.try_update_value(|r| r.register())
    }

    fn release(self, id: RegionId) {
        self.registry.try_update_value(|r| r.release(id));
    }

    fn record(self, id: RegionId, intersecting: bool) -> bool {
        let transition = self
            .registry
            .try_update_value(|r| r.record(id, intersecting));
        matches!(transition, Some(Transition::Revealed))
    }

    fn reveal(self, id: RegionId) -> bool {
        let transition = self.registry.try_update_value(|r| r.reveal(id));
        matches!(transition, Some(Transition::Revealed))
    }

    fn log_progress(self) {
        self.registry.try_with_value(|r| {
            log::debug!("revealed {}/{} regions", r.revealed_count(), r.len());
        });
    }
}

/// Creates the registry for the page and makes it available to every
/// `<Reveal>` below.
pub fn provide_reveal_scope(config: RevealConfig) -> RevealScope {
    let scope = RevealScope {
        registry: StoredValue::new(RevealRegistry::new()),
        config,
    };
    provide_context(scope);
    scope
}

static DEGRADED: Once = Once::new();

fn intersection_supported() -> bool {
    js_sys::Reflect::has(&window(), &JsValue::from_str("IntersectionObserver")).unwrap_or(false)
}

/// Registers `target` with the page's reveal registry and flips the returned
/// signal the first time it scrolls into view. The registration is released
/// when the calling view unmounts.
pub fn use_reveal(target: NodeRef<html::Div>) -> Signal<bool> {
    let scope = expect_context::<RevealScope>();
    let revealed = RwSignal::new(false);
    let Some(id) = scope.register() else {
        return revealed.into();
    };
    on_cleanup(move || scope.release(id));

    use_intersection_observer_with_options(
        target,
        move |entries, observer| {
            let intersecting = entries.iter().any(|e| e.is_intersecting());
            if scope.record(id, intersecting) {
                revealed.try_set(true);
                observer.disconnect();
                scope.log_progress();
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![scope.config.threshold]),
    );

    Effect::new(move |_| {
        if intersection_supported() {
            return;
        }
        DEGRADED.call_once(|| {
            log::debug!(
                "IntersectionObserver unavailable, applying {:?}",
                scope.config.degrade
            );
        });
        match scope.config.degrade {
            DegradePolicy::RevealImmediately => {
                if scope.reveal(id) {
                    revealed.set(true);
                }
            }
            DegradePolicy::StayHidden => {}
        }
    });

    revealed.into()
}

fn delay_class(delay: u16) -> &'static str {
    match delay {
        0 => "",
        1..=100 => "delay-100",
        101..=200 => "delay-200",
        201..=300 => "delay-300",
        _ => "delay-400",
    }
}

/// A region that fades and slides in the first time it is scrolled into view.
#[component]
pub fn Reveal(
    /// Transition stagger in milliseconds, rounded up to the next 100.
    #[prop(optional)]
    delay: u16,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let node_ref = NodeRef::<html::Div>::new();
    let revealed = use_reveal(node_ref);
    let base = format!("reveal {} {}", delay_class(delay), class);

    view! {
        <div
            node_ref=node_ref
            class=move || {
                if revealed.get() { format!("{base} active") } else { base.clone() }
            }
        >
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delay_classes() {
        assert_eq!(delay_class(0), "");
        assert_eq!(delay_class(100), "delay-100");
        assert_eq!(delay_class(150), "delay-200");
        assert_eq!(delay_class(300), "delay-300");
        assert_eq!(delay_class(900), "delay-400");
    }
}

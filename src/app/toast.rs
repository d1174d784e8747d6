use leptos::prelude::*;

#[component]
pub fn Toast(visible: Signal<bool>) -> impl IntoView {
    view! {
        <div
            role="status"
            aria-live="polite"
            class=move || {
                format!(
                    "fixed bottom-10 left-1/2 transform -translate-x-1/2 bg-white text-ink px-6 py-3 rounded-full font-bold shadow-2xl z-50 transition-all duration-300 w-max max-w-[90%] text-center flex items-center {}",
                    if visible.get() {
                        "opacity-100 translate-y-0"
                    } else {
                        "opacity-0 translate-y-10 pointer-events-none"
                    },
                )
            }
        >
            <span class="text-green-500 mr-2">"✔"</span>
            "Copied to clipboard!"
        </div>
    }
}

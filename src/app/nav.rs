use leptos::prelude::*;

use crate::content::NavItem;

#[component]
pub fn NavBar(
    initials: &'static str,
    resume: &'static str,
    items: &'static [NavItem],
    menu_open: Signal<bool>,
    on_toggle: Callback<()>,
    /// Fired when a destination is picked from the mobile menu.
    on_select: Callback<()>,
) -> impl IntoView {
    view! {
        <nav class="fixed w-full z-50 transition-all duration-300 bg-navy/85 backdrop-blur-md border-b border-accent/10">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-20">
                    <div class="flex-shrink-0 flex items-center">
                        <a
                            href="#"
                            class="font-heading font-extrabold text-2xl text-white tracking-wider border-2 border-accent px-2 py-1 rounded"
                        >
                            {initials}
                            <span class="text-accent">"."</span>
                        </a>
                    </div>

                    <div class="hidden md:flex space-x-8 items-center">
                        {items
                            .iter()
                            .enumerate()
                            .map(|(i, item)| {
                                view! {
                                    <a
                                        href=item.href()
                                        class="text-white hover:text-accent transition-colors font-medium text-sm tracking-wide"
                                    >
                                        <span class="text-accent">{format!("{:02}.", i + 1)}</span>
                                        " "
                                        {item.label.as_str()}
                                    </a>
                                }
                            })
                            .collect_view()}
                        <a
                            href=resume
                            class="px-5 py-2 border border-accent text-accent font-medium text-sm rounded hover:bg-accent hover:text-white hover:shadow-glow transition-all duration-300"
                        >
                            "Resume"
                        </a>
                    </div>

                    <div class="md:hidden flex items-center">
                        <button
                            class="text-white hover:text-accent focus:outline-none text-2xl leading-none"
                            aria-label="Toggle navigation"
                            aria-expanded=move || menu_open.get().to_string()
                            on:click=move |_| on_toggle.run(())
                        >
                            {move || if menu_open.get() { "✕" } else { "☰" }}
                        </button>
                    </div>
                </div>
            </div>

            <div class=move || {
                format!(
                    "md:hidden bg-navy absolute w-full shadow-xl border-b border-panel transition-all duration-300 overflow-hidden {}",
                    if menu_open.get() { "max-h-96" } else { "max-h-0" },
                )
            }>
                <div class="px-6 pt-4 pb-8 space-y-4">
                    {items
                        .iter()
                        .map(|item| {
                            view! {
                                <a
                                    href=item.href()
                                    class="block py-2 text-white hover:text-accent"
                                    on:click=move |_| on_select.run(())
                                >
                                    {item.label.as_str()}
                                </a>
                            }
                        })
                        .collect_view()}
                    <a
                        href=resume
                        class="block w-full text-center mt-4 px-5 py-3 bg-accent text-white font-bold rounded hover:shadow-glow transition-all"
                    >
                        "Download Resume"
                    </a>
                </div>
            </div>
        </nav>
    }
}

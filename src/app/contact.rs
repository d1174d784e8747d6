use leptos::{ev::MouseEvent, prelude::*};

use super::reveal::Reveal;
use crate::content;

const CHIP_CLASS: &str = "flex items-center gap-3 px-6 py-4 bg-panel rounded text-white hover:bg-line transition-colors cursor-pointer group";

#[component]
pub fn Contact(contact: &'static content::Contact, on_copy: Callback<String>) -> impl IntoView {
    let copy = move |text: &'static str| {
        move |ev: MouseEvent| {
            ev.prevent_default();
            on_copy.run(text.to_string());
        }
    };

    view! {
        <section id="contact" class="py-24 bg-navy">
            <div class="max-w-4xl mx-auto px-4 sm:px-6 lg:px-8 text-center">
                <Reveal>
                    <span class="text-accent font-mono text-sm mb-4 block">
                        {contact.kicker.as_str()}
                    </span>
                </Reveal>
                <Reveal delay=100>
                    <h2 class="text-4xl md:text-5xl font-heading font-bold text-white mb-6">
                        "Get In Touch"
                    </h2>
                </Reveal>
                <Reveal delay=200>
                    <p class="text-slate text-lg max-w-xl mx-auto mb-12">
                        {contact.blurb.as_str()}
                    </p>
                </Reveal>

                <Reveal delay=300 class="flex flex-wrap justify-center gap-6 mb-12">
                    <button class=CHIP_CLASS on:click=copy(contact.email.as_str())>
                        <span class="text-accent group-hover:scale-110 transition-transform">"✉"</span>
                        <span class="break-all">{contact.email.as_str()}</span>
                    </button>
                    <button class=CHIP_CLASS on:click=copy(contact.phone.dial.as_str())>
                        <span class="text-accent group-hover:scale-110 transition-transform">"☎"</span>
                        <span>{contact.phone.display.as_str()}</span>
                    </button>
                    <a
                        href=contact.whatsapp.as_str()
                        target="_blank"
                        rel="noreferrer"
                        class=CHIP_CLASS
                    >
                        <span class="text-accent group-hover:scale-110 transition-transform">"💬"</span>
                        <span>"WhatsApp"</span>
                    </a>
                </Reveal>

                <Reveal delay=400 class="inline-block">
                    <a
                        href=format!("mailto:{}", contact.email)
                        class="inline-block px-10 py-5 border-2 border-accent text-accent font-bold rounded hover:bg-accent hover:text-white hover:shadow-lg hover:shadow-blue-500/30 transition-all duration-300"
                    >
                        "Say Hello"
                    </a>
                </Reveal>

                <div class="mt-20 flex justify-center space-x-8 text-2xl text-slate">
                    <a
                        href=contact.linkedin.as_str()
                        target="_blank"
                        rel="noopener noreferrer"
                        aria-label="LinkedIn Profile"
                        class="hover:text-accent hover:-translate-y-1 transition-all"
                    >
                        "in"
                    </a>
                    <a
                        href=contact.website.as_str()
                        target="_blank"
                        rel="noopener noreferrer"
                        aria-label="Website"
                        class="hover:text-accent hover:-translate-y-1 transition-all"
                    >
                        "🌐"
                    </a>
                </div>

                <p class="mt-8 text-sm text-slate font-mono">
                    {format!("© {} · {}", env!("BUILD_YEAR"), contact.credit)}
                </p>
            </div>
        </section>
    }
}

use leptos::prelude::*;

use super::{reveal::Reveal, typing::use_typewriter};
use crate::content;
use crate::typing::{Typewriter, TypingError};

#[component]
pub fn Hero(
    hero: &'static content::Hero,
    name: &'static str,
    typewriter: Result<Typewriter, TypingError>,
) -> impl IntoView {
    let typed: Signal<String> = match typewriter {
        Ok(typewriter) => use_typewriter(typewriter).into(),
        Err(err) => {
            log::error!("hero animation disabled: {err}");
            Signal::stored(String::new())
        }
    };

    view! {
        <section class="min-h-screen flex items-center justify-center relative bg-ink pt-20 overflow-hidden">
            <div class="absolute top-20 right-0 w-96 h-96 bg-accent rounded-full mix-blend-screen filter blur-[128px] opacity-10 animate-float"></div>
            <div
                class="absolute bottom-0 left-0 w-72 h-72 bg-blue-400 rounded-full mix-blend-screen filter blur-[100px] opacity-10 animate-float"
                style="animation-delay: 2s"
            ></div>
            <div class="absolute inset-0 bg-grid opacity-[0.05]"></div>

            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 relative z-10 w-full">
                <div class="max-w-4xl">
                    <Reveal>
                        <p class="text-accent font-medium mb-4 tracking-wider">
                            {hero.greeting.as_str()}
                        </p>
                    </Reveal>
                    <Reveal delay=100>
                        <h1 class="text-4xl sm:text-5xl md:text-7xl font-heading font-bold text-white mb-4 leading-tight">
                            {format!("{name}.")}
                        </h1>
                    </Reveal>
                    <Reveal delay=200>
                        <h2 class="text-3xl sm:text-4xl md:text-6xl font-heading font-bold text-slate mb-8 leading-tight">
                            {hero.lead.as_str()}
                            <span class="text-gradient typing-cursor">{typed}</span>
                        </h2>
                    </Reveal>
                    <Reveal delay=300>
                        <p class="text-lg md:text-xl text-slate max-w-2xl mb-12 leading-relaxed">
                            {hero.intro.as_str()}
                        </p>
                    </Reveal>
                    <Reveal delay=400 class="flex flex-col sm:flex-row gap-4">
                        <a
                            href="#contact"
                            class="w-full sm:w-auto px-8 py-4 bg-accent text-white font-bold rounded hover:bg-blue-600 transition-all transform hover:-translate-y-1 hover:shadow-lg shadow-blue-500/20 text-center"
                        >
                            "Get In Touch"
                        </a>
                        <a
                            href="#experience"
                            class="w-full sm:w-auto px-8 py-4 border border-white text-white font-bold rounded hover:bg-white hover:text-ink transition-all transform hover:-translate-y-1 text-center"
                        >
                            "View Experience"
                        </a>
                    </Reveal>
                </div>
            </div>

            <div class="absolute bottom-10 left-1/2 transform -translate-x-1/2 text-white text-2xl animate-bounce hidden md:block">
                <a href="#about" aria-label="Scroll to about">"⌄"</a>
            </div>
        </section>
    }
}

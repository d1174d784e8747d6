use leptos::{either::EitherOf3, prelude::*};

use super::reveal::Reveal;
use crate::content::{self, Emphasis, Portrait, Segment};

fn segment(segment: &'static Segment) -> impl IntoView {
    let text = segment.text.as_str();
    match segment.emphasis {
        Emphasis::Plain => EitherOf3::A(text),
        Emphasis::Accent => EitherOf3::B(view! { <span class="text-accent">{text}</span> }),
        Emphasis::Strong => EitherOf3::C(view! { <span class="text-white font-bold">{text}</span> }),
    }
}

#[component]
pub fn SectionHeading(number: &'static str, title: &'static str) -> impl IntoView {
    view! {
        <div class="flex items-center">
            <span class="text-2xl md:text-3xl font-heading font-bold text-white mr-4">
                <span class="text-accent">{number}</span>
                " "
                {title}
            </span>
            <div class="h-[1px] bg-line flex-grow max-w-xs"></div>
        </div>
    }
}

#[component]
pub fn About(about: &'static content::About) -> impl IntoView {
    view! {
        <section id="about" class="py-24 bg-navy">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex flex-col md:flex-row gap-16 items-center">
                    <div class="md:w-3/5">
                        <Reveal class="mb-8">
                            <SectionHeading number="01." title="About Me" />
                        </Reveal>

                        <Reveal delay=100 class="space-y-4 text-slate">
                            {about
                                .paragraphs
                                .iter()
                                .map(|p| view! { <p>{p.iter().map(segment).collect_view()}</p> })
                                .collect_view()}
                        </Reveal>

                        <Reveal delay=200>
                            <ul class="grid grid-cols-2 gap-2 mt-8 text-sm font-medium text-white">
                                {about
                                    .highlights
                                    .iter()
                                    .map(|skill| {
                                        view! {
                                            <li class="flex items-center">
                                                <span class="text-accent mr-2">"›"</span>
                                                {skill.as_str()}
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        </Reveal>
                    </div>

                    <Reveal delay=300 class="md:w-2/5 relative group">
                        <Photo portrait=&about.portrait />
                    </Reveal>
                </div>
            </div>
        </section>
    }
}

/// Profile photo over a placeholder panel. A missing image just fades out and
/// leaves the placeholder visible.
#[component]
fn Photo(portrait: &'static Portrait) -> impl IntoView {
    let (failed, set_failed) = signal(false);

    view! {
        <div class="relative w-64 h-64 md:w-80 md:h-80 mx-auto">
            <div class="absolute inset-0 border-2 border-accent rounded transition-transform transform translate-x-4 translate-y-4 group-hover:translate-x-2 group-hover:translate-y-2 z-0"></div>
            <div class="absolute inset-0 bg-line rounded overflow-hidden z-10 transition-all duration-300 grayscale group-hover:grayscale-0">
                <div class="w-full h-full bg-gradient-to-br from-gray-700 to-gray-900 flex items-center justify-center text-gray-500">
                    <span class="text-center p-4">{portrait.placeholder.as_str()}</span>
                </div>
                <img
                    src=portrait.src.as_str()
                    alt=portrait.alt.as_str()
                    class=move || {
                        if failed.get() {
                            "w-full h-full object-cover absolute inset-0 opacity-0"
                        } else {
                            "w-full h-full object-cover absolute inset-0 opacity-100"
                        }
                    }
                    on:error=move |_| {
                        log::debug!("portrait failed to load, showing placeholder");
                        set_failed.set(true);
                    }
                />
            </div>
        </div>
    }
}

use leptos::prelude::*;

use super::{about::SectionHeading, reveal::Reveal};
use crate::content::{self, Gig, Job};

#[component]
pub fn Experience(experience: &'static content::Experience) -> impl IntoView {
    view! {
        <section id="experience" class="py-24 bg-ink">
            <div class="max-w-4xl mx-auto px-4 sm:px-6 lg:px-8">
                <Reveal class="mb-12">
                    <SectionHeading number="02." title="Where I've Worked" />
                </Reveal>

                <Reveal delay=100 class="relative border-l-2 border-line ml-3 md:ml-6 space-y-12">
                    {experience
                        .jobs
                        .iter()
                        .enumerate()
                        .map(|(idx, job)| view! { <TimelineEntry job current={idx == 0} /> })
                        .collect_view()}
                </Reveal>

                <Reveal delay=300 class="mt-16">
                    <h3 class="text-xl font-bold text-white mb-6 flex items-center">
                        <span class="text-accent mr-3">"▣"</span>
                        "Freelance & Contract Highlights"
                    </h3>
                    <div class="grid md:grid-cols-2 gap-4">
                        {experience.freelance.iter().map(|gig| view! { <GigCard gig /> }).collect_view()}
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

#[component]
fn TimelineEntry(job: &'static Job, current: bool) -> impl IntoView {
    let marker = if current {
        "border-accent bg-accent"
    } else {
        "border-slate"
    };

    view! {
        <div class="relative pl-8 group">
            <div class=format!(
                "absolute -left-[9px] top-0 w-4 h-4 bg-ink border-2 {marker} rounded-full group-hover:bg-accent group-hover:border-accent transition-colors",
            )></div>
            <h3 class="text-xl font-bold text-white group-hover:text-accent transition-colors">
                {job.role.as_str()}
            </h3>
            <h4 class="text-lg font-medium text-slate mb-1">{job.company.as_str()}</h4>
            {job
                .period
                .as_deref()
                .map(|period| {
                    view! { <span class="text-sm font-mono text-slate mb-4 block">{period}</span> }
                })}
            <ul class="list-none space-y-2 text-slate text-sm mt-2">
                {job
                    .points
                    .iter()
                    .map(|point| {
                        view! {
                            <li class="flex items-start">
                                <span class="text-accent mr-2">"▹"</span>
                                <span class="flex-1">{point.as_str()}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

#[component]
fn GigCard(gig: &'static Gig) -> impl IntoView {
    view! {
        <div class="bg-navy p-4 rounded border border-panel hover:border-accent transition-colors">
            <h4 class="text-white font-bold">{gig.role.as_str()}</h4>
            <p class="text-sm text-slate">{gig.company.as_str()}</p>
        </div>
    }
}

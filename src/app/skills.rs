use leptos::prelude::*;

use super::{about::SectionHeading, reveal::Reveal};
use crate::content::SkillGroup;

#[component]
pub fn Skills(skills: &'static [SkillGroup]) -> impl IntoView {
    view! {
        <section id="skills" class="py-24 bg-navy">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <Reveal class="mb-12">
                    <SectionHeading number="03." title="Technical Expertise" />
                </Reveal>

                <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                    {skills
                        .iter()
                        .enumerate()
                        .map(|(idx, skill)| {
                            // stagger the cards left to right
                            let delay = ((idx + 1) * 100).min(400) as u16;
                            view! {
                                <Reveal
                                    delay
                                    class="bg-panel p-8 rounded shadow-xl hover:-translate-y-2 transition-transform duration-300 border-t-4 border-accent"
                                >
                                    <div class="text-accent mb-6 text-4xl font-mono">
                                        {skill.icon.symbol()}
                                    </div>
                                    <h3 class="text-xl font-bold text-white mb-4">
                                        {skill.title.as_str()}
                                    </h3>
                                    <p class="text-slate text-sm mb-6">{skill.description.as_str()}</p>
                                    <div class="flex flex-wrap gap-2">
                                        {skill
                                            .tags
                                            .iter()
                                            .map(|tag| {
                                                view! {
                                                    <span class="px-3 py-1 bg-ink text-accent text-xs font-mono rounded">
                                                        {tag.as_str()}
                                                    </span>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

use leptos::prelude::*;

use super::reveal::Reveal;
use crate::content::Credential;

#[component]
pub fn Education(credentials: &'static [Credential]) -> impl IntoView {
    view! {
        <section class="py-24 bg-ink">
            <div class="max-w-4xl mx-auto px-4 sm:px-6 lg:px-8 text-center">
                <Reveal>
                    <h2 class="text-2xl md:text-3xl font-heading font-bold text-white mb-12">
                        "Education & Certifications"
                    </h2>
                </Reveal>

                <div class="grid md:grid-cols-2 gap-8">
                    {credentials
                        .iter()
                        .enumerate()
                        .map(|(idx, credential)| {
                            let delay = ((idx + 1) * 100).min(400) as u16;
                            view! {
                                <Reveal
                                    delay
                                    class="bg-navy p-6 rounded border border-panel hover:border-accent transition-colors flex flex-col items-center"
                                >
                                    <span class="text-accent text-4xl mb-4">
                                        {credential.icon.symbol()}
                                    </span>
                                    <h3 class="text-white font-bold text-lg">
                                        {credential.title.as_str()}
                                    </h3>
                                    <p class="text-slate text-sm">{credential.issuer.as_str()}</p>
                                    <span class="text-accent text-xs font-mono mt-2 block">
                                        {credential.status.as_str()}
                                    </span>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

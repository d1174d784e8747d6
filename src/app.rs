mod about;
mod clipboard;
mod contact;
mod education;
mod experience;
mod hero;
mod nav;
mod reveal;
mod skills;
mod timer;
mod toast;
mod typing;

use leptos::{either::Either, prelude::*, task::spawn_local};
use leptos_meta::*;
use leptos_router::{components::*, path};

use about::About;
use contact::Contact;
use education::Education;
use experience::Experience;
use hero::Hero;
use nav::NavBar;
use reveal::provide_reveal_scope;
use skills::Skills;
use timer::TimerSlot;
use toast::Toast;

use crate::content::{portfolio, ContentError, Portfolio};
use crate::interaction::{MenuState, ToastState};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="scroll-smooth">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/junaid-portfolio.css" />
                <MetaTags />
            </head>
            <body class="font-sans text-slate bg-ink selection:bg-accent selection:text-white overflow-x-hidden">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("Muhammad Junaid Asghar - {title}") />
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    match portfolio() {
        Ok(portfolio) => Either::Left(view! { <PortfolioPage portfolio /> }),
        Err(err) => Either::Right(view! { <ContentFailure err /> }),
    }
}

/// Owns the page's interaction state. Sections only get read-only signals and
/// callbacks.
#[component]
fn PortfolioPage(portfolio: &'static Portfolio) -> impl IntoView {
    provide_reveal_scope(portfolio.motion.reveal());

    let menu = RwSignal::new(MenuState::default());
    let toast = RwSignal::new(ToastState::default());
    let dismiss = TimerSlot::new();
    let toast_window = portfolio.motion.toast_duration();

    let on_toggle_menu = Callback::new(move |()| menu.update(MenuState::toggle));
    let on_select = Callback::new(move |()| menu.update(MenuState::close));
    let on_copy = Callback::new(move |text: String| {
        spawn_local(async move {
            match clipboard::write_text(&text).await {
                Ok(()) => {
                    let Some(ticket) = toast.try_update(ToastState::show) else {
                        return;
                    };
                    dismiss.start(toast_window, move || {
                        toast.try_update(|t| t.dismiss(ticket));
                    });
                }
                Err(err) => log::warn!("couldn't copy {text:?}: {err}"),
            }
        });
    });

    let menu_open = Signal::derive(move || menu.get().is_open());
    let toast_visible = Signal::derive(move || toast.get().is_visible());

    view! {
        <Title text="Portfolio" />
        <Meta name="description" content=portfolio.hero.intro.as_str() />
        <div class="font-sans text-slate bg-ink overflow-x-hidden">
            <Toast visible=toast_visible />
            <NavBar
                initials=portfolio.identity.initials.as_str()
                resume=portfolio.identity.resume.as_str()
                items=portfolio.nav.as_slice()
                menu_open
                on_toggle=on_toggle_menu
                on_select
            />
            <Hero hero=&portfolio.hero name=portfolio.identity.name.as_str() typewriter=portfolio.typewriter() />
            <About about=&portfolio.about />
            <Experience experience=&portfolio.experience />
            <Skills skills=portfolio.skills.as_slice() />
            <Education credentials=portfolio.education.as_slice() />
            <Contact contact=&portfolio.contact on_copy />
        </div>
    }
}

#[component]
fn ContentFailure(err: ContentError) -> impl IntoView {
    log::error!("portfolio content failed to load: {err}");
    view! {
        <Title text="Unavailable" />
        <main class="min-h-screen flex items-center justify-center bg-ink">
            <div class="max-w-xl p-6 rounded border border-panel bg-navy text-center">
                <h1 class="text-white font-bold text-2xl mb-4">"This page is temporarily unavailable"</h1>
                <pre class="whitespace-pre-wrap text-sm">{err.to_string()}</pre>
            </div>
        </main>
    }
}

mod browser;
mod footer;
mod home;
mod minigame;
mod projects;

use leptos::{either::*, prelude::*};
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::DISPLAY_NAME;
use crate::nav::{View, ViewController};

use browser::BrowserStore;
use footer::Footer;
use home::HomePage;
use minigame::MiniGame;
use projects::ProjectsGrid;

type Controller = RwSignal<ViewController<BrowserStore>>;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="dark">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark light" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link
                    rel="stylesheet"
                    href="https://fonts.googleapis.com/css2?family=JetBrains+Mono:wght@400;500;600&family=Inter:wght@400;500;600&display=swap"
                />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/neon-portfolio.css" />
                <MetaTags />
            </head>
            <body>
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
        <Title formatter=|title| format!("{DISPLAY_NAME} - {title}") />
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=Portfolio />
            </Routes>
        </Router>
    }
}

/// The single page: navigation bar plus whichever view is active.
#[component]
fn Portfolio() -> impl IntoView {
    let store = BrowserStore::new();
    let controller: Controller = RwSignal::new(ViewController::new(store));

    // local storage is only readable once hydrated; the store reads untracked,
    // so this runs once
    Effect::new(move |_| {
        controller.update(|c| {
            c.restore_theme();
        });
    });

    Effect::new(move |_| {
        let theme = controller.with(|c| c.theme());
        browser::apply_theme(theme);
    });

    let active = Memo::new(move |_| controller.with(|c| c.active_view()));

    view! {
        <div class="min-h-screen transition-colors duration-300">
            <Navigation controller />
            {move || match active.get() {
                View::Home => {
                    EitherOf3::A(
                        view! {
                            <Title text="Home" />
                            <HomePage />
                            <Footer />
                        },
                    )
                }
                View::Projects => {
                    EitherOf3::B(
                        view! {
                            <Title text="Projects" />
                            <ProjectsGrid />
                            <Footer />
                        },
                    )
                }
                View::MiniGame => {
                    EitherOf3::C(
                        view! {
                            <Title text="Mini Game" />
                            <MiniGame />
                            <Footer />
                        },
                    )
                }
            }}
        </div>
    }
}

#[component]
fn Navigation(controller: Controller) -> impl IntoView {
    let navigate = move |view: View| {
        controller.update(|c| {
            c.navigate(view);
        });
        browser::scroll_to_top();
    };
    let is_dark = move || controller.with(|c| c.theme().is_dark());

    view! {
        <nav class="fixed top-0 left-0 right-0 z-50 h-[70px] bg-background/80 backdrop-blur-md border-b border-border">
            <div class="max-w-7xl mx-auto px-6 h-full flex items-center justify-between">
                <div
                    class="relative font-mono cursor-pointer group"
                    on:click=move |_| navigate(View::Home)
                >
                    <span class="relative z-10 text-2xl tracking-wider">
                        <span class="text-neon-cyan">"D"</span>
                        <span class="text-neon-purple">"E"</span>
                    </span>
                    <span class="absolute inset-0 text-2xl tracking-wider opacity-0 group-hover:opacity-100 text-glitch-pink glitch">
                        "DE"
                    </span>
                </div>
                <div class="flex items-center gap-8">
                    {View::ALL
                        .into_iter()
                        .map(|view| {
                            let is_active = move || {
                                controller.with(|c| c.active_view() == view)
                            };
                            view! {
                                <button
                                    class="relative font-mono tracking-wider transition-colors"
                                    style:color=move || {
                                        if is_active() {
                                            "var(--neon-cyan)"
                                        } else {
                                            "var(--muted-foreground)"
                                        }
                                    }
                                    on:click=move |_| navigate(view)
                                >
                                    {view.label()}
                                    <Show when=is_active>
                                        <div class="absolute -bottom-1 left-0 right-0 h-0.5 bg-neon-cyan"></div>
                                    </Show>
                                </button>
                            }
                        })
                        .collect_view()}
                    <button
                        class="p-2 rounded-lg border border-border hover:bg-accent/10 transition-colors"
                        aria-label="Toggle theme"
                        style:color=move || {
                            if is_dark() { "var(--neon-cyan)" } else { "var(--neon-purple)" }
                        }
                        on:click=move |_| {
                            controller
                                .update(|c| {
                                    c.toggle_theme();
                                })
                        }
                    >
                        {move || if is_dark() { "☀" } else { "☾" }}
                    </button>
                </div>
            </div>
        </nav>
    }
}

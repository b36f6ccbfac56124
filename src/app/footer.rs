use leptos::prelude::*;

use crate::content::{copyright_year, DISPLAY_NAME, SOCIALS};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="relative py-12 px-6 border-t border-border bg-secondary">
            <div class="max-w-7xl mx-auto flex flex-col items-center gap-6">
                <div class="flex items-center gap-10">
                    {SOCIALS
                        .iter()
                        .map(|social| {
                            view! {
                                <a
                                    href=social.href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    aria-label=social.label
                                    class="relative w-12 h-12 rounded-full border-2 border-neon-cyan flex items-center justify-center text-neon-cyan hover:shadow-neon-cyan transition-shadow"
                                >
                                    <i class=social.icon></i>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
                <p class="text-sm text-muted-foreground font-mono">
                    {format!("© {} {}", copyright_year(), DISPLAY_NAME)}
                </p>
            </div>
        </footer>
    }
}

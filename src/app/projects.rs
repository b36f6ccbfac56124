use leptos::prelude::*;

use crate::content::{Project, PROJECTS};

#[component]
pub fn ProjectsGrid() -> impl IntoView {
    // at most one card is open at a time
    let (expanded, set_expanded) = signal(None::<&'static str>);

    view! {
        <section class="py-24 px-6 min-h-screen pt-[120px]">
            <div class="max-w-5xl mx-auto">
                <div class="mb-12">
                    <h2 class="font-mono tracking-wider mb-4 text-neon-cyan">"// PROJECTS"</h2>
                    <div class="h-0.5 w-[100px] bg-neon-purple heading-bar"></div>
                </div>
                <div class="space-y-6">
                    {PROJECTS
                        .iter()
                        .enumerate()
                        .map(|(index, project)| {
                            let is_expanded = Signal::derive(move || {
                                expanded.get() == Some(project.id)
                            });
                            let on_toggle = move || {
                                set_expanded
                                    .update(|open| {
                                        *open = if *open == Some(project.id) {
                                            None
                                        } else {
                                            Some(project.id)
                                        };
                                    })
                            };
                            view! { <ProjectCard project index is_expanded on_toggle /> }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard<F>(
    project: &'static Project,
    index: usize,
    is_expanded: Signal<bool>,
    on_toggle: F,
) -> impl IntoView
where
    F: Fn() + 'static,
{
    let border = move || {
        if is_expanded.get() {
            project.border_color
        } else {
            "var(--border)"
        }
    };
    let shadow = move || {
        if is_expanded.get() {
            format!("0 0 20px {}", project.border_color)
        } else {
            "none".to_string()
        }
    };

    view! {
        <div
            class="bg-card rounded-lg overflow-hidden cursor-pointer border-2 rise-in"
            style:border-color=border
            style:box-shadow=shadow
            style:animation-delay=format!("{}ms", index * 100)
        >
            <div class="flex items-start gap-6 p-6" on:click=move |_| on_toggle()>
                <div
                    class="flex-shrink-0 w-[120px] h-[120px] rounded overflow-hidden border-2"
                    style:border-color=project.border_color
                >
                    <img
                        src=project.thumbnail
                        alt=project.title
                        class="w-full h-full object-cover"
                    />
                </div>
                <div class="flex-1">
                    <div class="flex items-start justify-between gap-4">
                        <div>
                            <h3 class="font-mono mb-2">{project.title}</h3>
                            <p class="text-muted-foreground text-sm line-clamp-2">
                                {project.short_description}
                            </p>
                        </div>
                        <span class="font-mono text-xl" style:color=project.border_color>
                            {move || if is_expanded.get() { "−" } else { "+" }}
                        </span>
                    </div>
                </div>
            </div>
            <Show when=move || is_expanded.get()>
                <div class="px-6 pb-6 border-t border-border pt-4">
                    <p class="text-muted-foreground mb-4">{project.full_description}</p>
                    <div class="flex flex-wrap gap-2 mb-4">
                        {project
                            .tech_stack
                            .iter()
                            .map(|tech| {
                                view! {
                                    <span
                                        class="px-3 py-1 text-xs font-mono rounded border"
                                        style:border-color=project.border_color
                                    >
                                        {*tech}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>
                    <div class="flex gap-4">
                        {project
                            .demo_url
                            .map(|href| {
                                view! {
                                    <a
                                        href=href
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="font-mono text-sm text-neon-cyan hover:underline"
                                    >
                                        "Live Demo ↗"
                                    </a>
                                }
                            })}
                        {project
                            .github_url
                            .map(|href| {
                                view! {
                                    <a
                                        href=href
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="font-mono text-sm text-neon-purple hover:underline"
                                    >
                                        <i class="devicon-github-plain mr-1"></i>
                                        "Source"
                                    </a>
                                }
                            })}
                    </div>
                </div>
            </Show>
        </div>
    }
}

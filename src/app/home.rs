use leptos::prelude::*;

use crate::content::{
    Job, Skill, ABOUT, EXPERIENCE, INTERESTS, NAME, PROFILE_IMAGE, SKILL_CATEGORIES, TITLE,
};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Hero />
        <About />
        <Skills />
        <Experience />
    }
}

#[component]
fn SectionHeading(text: &'static str) -> impl IntoView {
    view! {
        <div class="mb-12">
            <h2 class="font-mono tracking-wider mb-4 flex items-center gap-2 text-neon-cyan">
                {text} <span class="cursor-blink">"_"</span>
            </h2>
            <div class="h-0.5 w-[100px] bg-neon-purple heading-bar"></div>
        </div>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <div class="relative min-h-screen flex items-center justify-center pt-[70px] overflow-hidden">
            <div class="absolute inset-0 opacity-10 hero-grid"></div>
            <div class="relative z-10 w-full max-w-7xl px-6">
                <div class="flex flex-col md:flex-row items-center gap-8 md:gap-12 fade-in">
                    <div class="flex-shrink-0 hero-avatar">
                        <div class="relative rounded-full overflow-hidden w-48 h-48 border-[3px] border-neon-cyan shadow-neon-cyan">
                            <img src=PROFILE_IMAGE alt=NAME class="w-full h-full object-cover" />
                            <div class="absolute inset-0 pointer-events-none border-2 border-glitch-pink glitch-frame"></div>
                        </div>
                    </div>
                    <div class="flex-1 text-center md:text-left slide-in">
                        <h1 class="font-mono tracking-wider mb-2 text-2xl sm:text-3xl md:text-4xl text-foreground">
                            {NAME}
                        </h1>
                        <p class="font-mono tracking-[0.2em] text-sm sm:text-base md:text-lg text-neon-cyan">
                            {TITLE}
                        </p>
                    </div>
                </div>
            </div>
            <div class="absolute bottom-8 left-1/2 -translate-x-1/2 text-neon-cyan text-3xl bounce">
                "⌄"
            </div>
        </div>
    }
}

#[component]
fn About() -> impl IntoView {
    view! {
        <section class="py-24 px-6">
            <div class="max-w-7xl mx-auto">
                <SectionHeading text="// ABOUT ME" />
                <div class="grid md:grid-cols-2 gap-8">
                    <div class="bg-card border border-border rounded-lg p-6 shadow-lg">
                        {ABOUT
                            .iter()
                            .map(|p| view! { <p class="text-muted-foreground mb-4">{*p}</p> })
                            .collect_view()}
                    </div>
                    <div class="bg-card border border-border rounded-lg p-6 shadow-lg">
                        <h3 class="font-mono mb-6 text-neon-purple">"INTERESTS & HOBBIES"</h3>
                        <div class="grid grid-cols-2 gap-4">
                            {INTERESTS
                                .iter()
                                .map(|item| {
                                    view! {
                                        <div class="flex flex-col items-center gap-2 p-4 rounded-lg border border-border hover:border-accent transition-colors">
                                            <span class="text-3xl">{item.icon}</span>
                                            <span class="text-sm text-center">{item.label}</span>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Skills() -> impl IntoView {
    view! {
        <section class="py-24 px-6">
            <div class="max-w-7xl mx-auto">
                <SectionHeading text="// SKILLS" />
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {SKILL_CATEGORIES
                        .iter()
                        .map(|category| {
                            view! {
                                <div class="bg-card border border-border rounded-lg p-6">
                                    <h3 class="font-mono mb-6 text-neon-purple">
                                        {category.category}
                                    </h3>
                                    <div class="space-y-4">
                                        {category
                                            .skills
                                            .iter()
                                            .map(|skill| view! { <SkillBar skill /> })
                                            .collect_view()}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn SkillBar(skill: &'static Skill) -> impl IntoView {
    view! {
        <div>
            <div class="flex justify-between mb-2 text-sm">
                <span>{skill.name}</span>
                <span class="font-mono text-muted-foreground">
                    {format!("{}%", skill.percentage)}
                </span>
            </div>
            <div class="h-2 rounded-full bg-secondary overflow-hidden">
                <div
                    class="h-full rounded-full skill-fill"
                    style:width=format!("{}%", skill.percentage)
                ></div>
            </div>
        </div>
    }
}

#[component]
fn Experience() -> impl IntoView {
    let (hovered, set_hovered) = signal(None::<usize>);

    view! {
        <section class="py-24 px-6">
            <div class="max-w-7xl mx-auto">
                <SectionHeading text="// EXPERIENCE" />
                <div class="relative pl-8 border-l-2 border-neon-purple space-y-8">
                    {EXPERIENCE
                        .iter()
                        .enumerate()
                        .map(|(index, job)| {
                            let is_open = move || hovered.get() == Some(index);
                            view! {
                                <div
                                    on:mouseenter=move |_| set_hovered.set(Some(index))
                                    on:mouseleave=move |_| set_hovered.set(None)
                                >
                                    <TimelineEntry job is_open=Signal::derive(is_open) />
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn TimelineEntry(job: &'static Job, is_open: Signal<bool>) -> impl IntoView {
    let marker = if job.is_current {
        "bg-neon-cyan border-neon-cyan pulse"
    } else {
        "bg-card border-neon-purple"
    };
    view! {
        <div class="relative">
            <span class=format!(
                "absolute -left-[41px] top-1 w-4 h-4 rounded-full border-2 {marker}",
            )></span>
            <div class="bg-card border border-border rounded-lg p-6 hover:border-accent transition-colors">
                <div class="flex flex-wrap items-baseline justify-between gap-2 mb-2">
                    <h3 class="font-mono">{job.role}</h3>
                    <span class="font-mono text-sm text-neon-cyan">{job.duration}</span>
                </div>
                <p class="text-neon-purple mb-2">{job.company}</p>
                <Show when=move || is_open.get()>
                    <p class="text-muted-foreground text-sm">{job.description}</p>
                </Show>
            </div>
        </div>
    }
}

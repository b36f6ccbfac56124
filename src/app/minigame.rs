use chrono::Utc;
use leptos::prelude::*;
use leptos_use::use_interval_fn;

use crate::game::{face_of, format_elapsed, Face, Game, Selection, PAIR_COUNT};

const TICK_MS: u64 = 1000;

#[component]
pub fn MiniGame() -> impl IntoView {
    let game = RwSignal::new(Game::new());
    let now = RwSignal::new(Utc::now());
    let _ = use_interval_fn(move || now.set(Utc::now()), TICK_MS);

    let select = move |id: usize| {
        // ignored clicks leave the board untouched, so nothing downstream reruns
        let Some(selection) = game.try_update_untracked(|g| g.select(id, Utc::now())) else {
            return;
        };
        if !selection.changed() {
            return;
        }
        game.notify();
        let Selection::Pending(resolution) = selection else {
            return;
        };
        set_timeout(
            move || {
                // None means the board was unmounted before the timer fired
                if game.try_update_untracked(|g| g.resolve(resolution, Utc::now())) == Some(true) {
                    game.notify();
                } else {
                    log::debug!("dropped resolution for cards {:?}", resolution.cards());
                }
            },
            resolution.delay(),
        );
    };
    let reset = move || game.update(|g| g.reset());

    let moves = move || game.with(|g| g.moves());
    let clock = move || game.with(|g| format_elapsed(g.elapsed(now.get()).num_seconds()));

    view! {
        <section class="py-24 px-6 min-h-screen pt-[120px]">
            <div class="max-w-5xl mx-auto fade-in">
                <div class="mb-12">
                    <h2 class="font-mono tracking-wider mb-4 text-neon-cyan">
                        "// NEON MEMORY MATCH"
                    </h2>
                    <div class="h-0.5 w-[100px] bg-neon-purple heading-bar"></div>
                </div>

                <div class="flex justify-between items-center mb-8 flex-wrap gap-4">
                    <div class="flex gap-6 font-mono text-sm">
                        <span>
                            <span class="text-neon-cyan mr-2">"#"</span>
                            "Moves: "
                            {moves}
                        </span>
                        <span>
                            <span class="text-neon-purple mr-2">"◷"</span>
                            {clock}
                        </span>
                        <span>
                            <span class="text-glitch-pink mr-2">"♛"</span>
                            "Matches: "
                            {move || game.with(|g| g.matched_pairs())}
                            {format!("/{PAIR_COUNT}")}
                        </span>
                    </div>
                    <button
                        class="flex items-center gap-2 px-4 py-2 rounded border-2 border-neon-cyan font-mono text-sm transition-colors"
                        on:click=move |_| reset()
                    >
                        "↻ New Game"
                    </button>
                </div>

                <div class="mb-8 mx-auto grid grid-cols-4 gap-4 max-w-[600px] aspect-square">
                    <For
                        each=move || {
                            game.with(|g| g.deck().iter().map(|c| c.id).enumerate().collect::<Vec<_>>())
                        }
                        key=|(_, id)| *id
                        children=move |(index, id)| {
                            face_of(id)
                                .map(|face| view! { <MemoryCard id face index game on_select=select /> })
                        }
                    />
                </div>

                <Show when=move || game.with(|g| g.is_won())>
                    <div
                        class="fixed inset-0 z-50 flex items-center justify-center bg-background/80 backdrop-blur-md"
                        on:click=move |_| reset()
                    >
                        <div
                            class="bg-card p-8 rounded-lg border-2 border-neon-cyan shadow-neon-cyan text-center pop-in"
                            on:click=|ev| ev.stop_propagation()
                        >
                            <div class="text-6xl mb-4 text-glitch-pink wiggle">"♛"</div>
                            <h3 class="font-mono text-2xl mb-4 text-neon-cyan">"YOU WON!"</h3>
                            <div class="space-y-2 mb-6 text-muted-foreground">
                                <p>"Time: " <span class="font-mono">{clock}</span></p>
                                <p>"Moves: " <span class="font-mono">{moves}</span></p>
                            </div>
                            <button
                                class="px-6 py-3 rounded border-2 border-neon-purple bg-neon-purple text-background font-mono transition-colors"
                                on:click=move |_| reset()
                            >
                                "Play Again"
                            </button>
                        </div>
                    </div>
                </Show>

                <div class="mt-8 p-6 bg-card rounded-lg border border-border">
                    <h3 class="font-mono mb-3 text-neon-purple">"How to Play"</h3>
                    <ul class="space-y-2 text-sm text-muted-foreground">
                        <li>"• Click cards to flip them over"</li>
                        <li>"• Find matching pairs of symbols"</li>
                        <li>{format!("• Match all {PAIR_COUNT} pairs to win")}</li>
                        <li>"• Try to complete the game in the fewest moves!"</li>
                    </ul>
                </div>
            </div>
        </section>
    }
}

/// One board slot. Keyed by card id, so it keeps its DOM node for the whole
/// session and only its own flip state is tracked.
#[component]
fn MemoryCard<F>(
    id: usize,
    face: Face,
    index: usize,
    game: RwSignal<Game>,
    on_select: F,
) -> impl IntoView
where
    F: Fn(usize) + 'static,
{
    let state = Memo::new(move |_| {
        game.with(|g| g.card(id).map(|c| (c.is_flipped, c.is_matched)).unwrap_or_default())
    });
    let revealed = move || {
        let (flipped, matched) = state.get();
        flipped || matched
    };
    let matched = move || state.get().1;

    view! {
        <div
            class="aspect-square cursor-pointer relative memory-card"
            class:revealed=revealed
            style:animation-delay=format!("{}ms", index * 20)
            on:click=move |_| on_select(id)
        >
            <div class="absolute inset-0 rounded-lg border-2 border-border bg-card flex items-center justify-center">
                <div class="absolute inset-0 rounded-lg card-shimmer"></div>
                <span class="font-mono text-4xl text-muted-foreground opacity-30">"?"</span>
            </div>
            <Show when=revealed>
                <div
                    class="absolute inset-0 rounded-lg border-2 bg-card flex items-center justify-center"
                    style:border-color=move || if matched() { face.color } else { "var(--border)" }
                    style:box-shadow=move || {
                        if matched() { format!("0 0 20px {}", face.color) } else { "none".to_string() }
                    }
                >
                    <span class="text-6xl" class:spin-pop=matched style:color=face.color>
                        {face.symbol}
                    </span>
                </div>
            </Show>
        </div>
    }
}

use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use rand::{rngs::SmallRng, seq::SliceRandom, Rng, SeedableRng};

pub const PAIR_COUNT: usize = 8;
pub const DECK_SIZE: usize = PAIR_COUNT * 2;

const MATCH_DELAY: Duration = Duration::from_millis(600);
const MISMATCH_DELAY: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Face {
    pub symbol: &'static str,
    pub color: &'static str,
}

pub const FACES: [Face; PAIR_COUNT] = [
    Face { symbol: "◆", color: "var(--neon-cyan)" },
    Face { symbol: "●", color: "var(--neon-purple)" },
    Face { symbol: "■", color: "var(--glitch-pink)" },
    Face { symbol: "▲", color: "var(--glitch-green)" },
    Face { symbol: "★", color: "#ff6b35" },
    Face { symbol: "◉", color: "#4ecdc4" },
    Face { symbol: "⬟", color: "#ffd700" },
    Face { symbol: "◈", color: "#ff1493" },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub id: usize,
    pub symbol: &'static str,
    pub color: &'static str,
    pub is_flipped: bool,
    pub is_matched: bool,
}

impl Card {
    fn new(id: usize, face: Face) -> Self {
        Self {
            id,
            symbol: face.symbol,
            color: face.color,
            is_flipped: false,
            is_matched: false,
        }
    }

    /// Whether the face should be shown, either pending or permanently.
    pub fn is_revealed(&self) -> bool {
        self.is_flipped || self.is_matched
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Match,
    Mismatch,
}

impl Outcome {
    /// How long both faces stay up before the outcome is applied.
    pub fn delay(self) -> Duration {
        match self {
            Outcome::Match => MATCH_DELAY,
            Outcome::Mismatch => MISMATCH_DELAY,
        }
    }
}

/// A deferred decision for a full pending selection.
///
/// Tickets are bound to the deck generation they were issued for; handing a
/// ticket back after a reset is harmless because [`Game::resolve`] discards it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    generation: u64,
    first: usize,
    second: usize,
    pub outcome: Outcome,
}

impl Resolution {
    pub fn cards(&self) -> (usize, usize) {
        (self.first, self.second)
    }

    pub fn delay(&self) -> Duration {
        self.outcome.delay()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// The click was not eligible and nothing changed.
    Ignored,
    /// One card is face up and waiting for a partner.
    Flipped,
    /// Two cards are face up; schedule the resolution after its delay.
    Pending(Resolution),
}

impl Selection {
    /// Whether the selection changed the board.
    pub fn changed(&self) -> bool {
        !matches!(self, Selection::Ignored)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    InProgress,
    Won,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    deck: Vec<Card>,
    pending: Vec<usize>,
    moves: u32,
    matched_pairs: usize,
    started_at: Option<DateTime<Utc>>,
    finished_at: Option<DateTime<Utc>>,
    generation: u64,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds the 16 cards in pair order and shuffles them in place.
pub fn create_deck<R: Rng + ?Sized>(rng: &mut R) -> Vec<Card> {
    let mut deck = FACES
        .iter()
        .enumerate()
        .flat_map(|(i, face)| [Card::new(i * 2, *face), Card::new(i * 2 + 1, *face)])
        .collect::<Vec<_>>();
    deck.shuffle(rng);
    deck
}

/// The face a card id was dealt with. Ids are assigned before the shuffle,
/// so the mapping holds for every deck.
pub fn face_of(id: usize) -> Option<Face> {
    FACES.get(id / 2).copied()
}

fn entropy_rng() -> SmallRng {
    SmallRng::try_from_os_rng().unwrap_or_else(|err| {
        log::warn!("os entropy unavailable, seeding deck from the clock: {err}");
        let seed = Utc::now()
            .timestamp_nanos_opt()
            .unwrap_or_else(|| Utc::now().timestamp_micros());
        SmallRng::seed_from_u64(seed as u64)
    })
}

impl Game {
    pub fn new() -> Self {
        Self::with_rng(&mut entropy_rng())
    }

    pub fn with_rng<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            deck: create_deck(rng),
            pending: Vec::with_capacity(2),
            moves: 0,
            matched_pairs: 0,
            started_at: None,
            finished_at: None,
            generation: 0,
        }
    }

    pub fn deck(&self) -> &[Card] {
        &self.deck
    }

    pub fn card(&self, id: usize) -> Option<&Card> {
        self.deck.iter().find(|c| c.id == id)
    }

    pub fn pending(&self) -> &[usize] {
        &self.pending
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn matched_pairs(&self) -> usize {
        self.matched_pairs
    }

    pub fn is_won(&self) -> bool {
        self.matched_pairs == PAIR_COUNT
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    pub fn phase(&self) -> Phase {
        if self.is_won() {
            Phase::Won
        } else if self.started_at.is_some() {
            Phase::InProgress
        } else {
            Phase::Idle
        }
    }

    /// Time spent on the current deck; frozen once the last pair is found.
    pub fn elapsed(&self, now: DateTime<Utc>) -> TimeDelta {
        match (self.started_at, self.finished_at) {
            (Some(start), Some(end)) => end - start,
            (Some(start), None) => (now - start).max(TimeDelta::zero()),
            (None, _) => TimeDelta::zero(),
        }
    }

    pub fn select(&mut self, id: usize, now: DateTime<Utc>) -> Selection {
        if self.is_won() || self.pending.len() >= 2 {
            return Selection::Ignored;
        }
        let Some(card) = self.deck.iter_mut().find(|c| c.id == id) else {
            return Selection::Ignored;
        };
        if card.is_flipped || card.is_matched {
            return Selection::Ignored;
        }

        card.is_flipped = true;
        self.pending.push(id);
        self.moves += 1;
        if self.started_at.is_none() {
            self.started_at = Some(now);
        }

        match self.pending[..] {
            [first, second] => {
                let symbol_of = |id| self.card(id).map(|c| c.symbol);
                let outcome = if symbol_of(first) == symbol_of(second) {
                    Outcome::Match
                } else {
                    Outcome::Mismatch
                };
                Selection::Pending(Resolution {
                    generation: self.generation,
                    first,
                    second,
                    outcome,
                })
            }
            _ => Selection::Flipped,
        }
    }

    /// Applies a resolution ticket. Returns false if the ticket is stale.
    pub fn resolve(&mut self, resolution: Resolution, now: DateTime<Utc>) -> bool {
        if resolution.generation != self.generation
            || self.pending[..] != [resolution.first, resolution.second]
        {
            log::debug!(
                "discarding stale resolution for generation {} (current {})",
                resolution.generation,
                self.generation
            );
            return false;
        }

        for card in self
            .deck
            .iter_mut()
            .filter(|c| c.id == resolution.first || c.id == resolution.second)
        {
            match resolution.outcome {
                Outcome::Match => card.is_matched = true,
                Outcome::Mismatch => card.is_flipped = false,
            }
        }
        self.pending.clear();

        if resolution.outcome == Outcome::Match {
            self.matched_pairs += 1;
            if self.is_won() {
                self.finished_at = Some(now);
                log::debug!("deck cleared in {} moves", self.moves);
            }
        }
        true
    }

    pub fn reset(&mut self) {
        self.reset_with_rng(&mut entropy_rng());
    }

    pub fn reset_with_rng<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let generation = self.generation.wrapping_add(1);
        *self = Self {
            generation,
            ..Self::with_rng(rng)
        };
    }
}

/// Formats whole seconds as `m:ss`.
pub fn format_elapsed(seconds: i64) -> String {
    let seconds = seconds.max(0);
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use std::collections::{HashMap, HashSet};

    use super::*;

    fn seeded(seed: u64) -> Game {
        Game::with_rng(&mut SmallRng::seed_from_u64(seed))
    }

    fn at(secs: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000 + secs, 0).expect("valid timestamp")
    }

    fn ids_for(game: &Game, symbol: &str) -> (usize, usize) {
        let ids = game
            .deck()
            .iter()
            .filter(|c| c.symbol == symbol)
            .map(|c| c.id)
            .collect::<Vec<_>>();
        assert_eq!(ids.len(), 2, "symbol {} should appear twice", symbol);
        (ids[0], ids[1])
    }

    fn expect_pending(selection: Selection) -> Resolution {
        match selection {
            Selection::Pending(res) => res,
            other => panic!("expected a pending resolution, got {:?}", other),
        }
    }

    fn play_pair(game: &mut Game, symbol: &str, now: DateTime<Utc>) {
        let (a, b) = ids_for(game, symbol);
        assert_eq!(game.select(a, now), Selection::Flipped);
        let res = expect_pending(game.select(b, now));
        assert!(game.resolve(res, now));
    }

    #[test]
    fn test_deck_composition() {
        for seed in 0..20 {
            let game = seeded(seed);
            assert_eq!(game.deck().len(), DECK_SIZE);

            let mut counts = HashMap::new();
            for card in game.deck() {
                *counts.entry(card.symbol).or_insert(0) += 1;
                assert!(!card.is_flipped);
                assert!(!card.is_matched);
            }
            assert_eq!(counts.len(), PAIR_COUNT);
            assert!(counts.values().all(|&n| n == 2));

            let ids = game.deck().iter().map(|c| c.id).collect::<HashSet<_>>();
            assert_eq!(ids.len(), DECK_SIZE);
        }
    }

    #[test]
    fn test_pairs_share_color() {
        let game = seeded(3);
        for face in FACES {
            let colors = game
                .deck()
                .iter()
                .filter(|c| c.symbol == face.symbol)
                .map(|c| c.color)
                .collect::<Vec<_>>();
            assert_eq!(colors, vec![face.color, face.color]);
        }
    }

    #[test]
    fn test_seeded_decks_are_reproducible() {
        assert_eq!(seeded(42).deck(), seeded(42).deck());

        let unshuffled = (0..DECK_SIZE).collect::<Vec<_>>();
        let shuffled = (0..10)
            .map(|seed| seeded(seed).deck().iter().map(|c| c.id).collect::<Vec<_>>())
            .any(|order| order != unshuffled);
        assert!(shuffled, "at least one seed should move a card");
    }

    #[test]
    fn test_fresh_game_is_idle() {
        let game = seeded(1);
        assert_eq!(game.phase(), Phase::Idle);
        assert_eq!(game.moves(), 0);
        assert_eq!(game.matched_pairs(), 0);
        assert!(game.pending().is_empty());
        assert!(!game.is_won());
        assert_eq!(game.started_at(), None);
        assert_eq!(game.elapsed(at(100)), TimeDelta::zero());
    }

    #[test]
    fn test_matching_pair() {
        let mut game = seeded(7);
        let (a, b) = ids_for(&game, "◆");

        assert_eq!(game.select(a, at(0)), Selection::Flipped);
        assert_eq!(game.phase(), Phase::InProgress);
        let res = expect_pending(game.select(b, at(1)));
        assert_eq!(res.outcome, Outcome::Match);
        assert_eq!(res.cards(), (a, b));
        assert_eq!(res.delay(), Duration::from_millis(600));

        // both faces stay up until the resolution lands
        assert!(game.card(a).is_some_and(|c| c.is_flipped && !c.is_matched));
        assert_eq!(game.pending(), &[a, b]);

        assert!(game.resolve(res, at(2)));
        assert!(game.card(a).is_some_and(|c| c.is_matched));
        assert!(game.card(b).is_some_and(|c| c.is_matched));
        assert_eq!(game.matched_pairs(), 1);
        assert_eq!(game.moves(), 2);
        assert!(game.pending().is_empty());
    }

    #[test]
    fn test_mismatched_pair() {
        let mut game = seeded(7);
        let (c, _) = ids_for(&game, "●");
        let (d, _) = ids_for(&game, "■");

        game.select(c, at(0));
        let res = expect_pending(game.select(d, at(1)));
        assert_eq!(res.outcome, Outcome::Mismatch);
        assert_eq!(res.delay(), Duration::from_millis(1000));

        assert!(game.resolve(res, at(2)));
        for id in [c, d] {
            let card = game.card(id).expect("card should exist");
            assert!(!card.is_flipped);
            assert!(!card.is_matched);
        }
        assert_eq!(game.matched_pairs(), 0);
        assert_eq!(game.moves(), 2);
        assert!(game.pending().is_empty());
    }

    #[test]
    fn test_ineligible_selections_are_noops() {
        let mut game = seeded(11);
        let (a, b) = ids_for(&game, "★");
        let (x, _) = ids_for(&game, "▲");

        // unknown card
        let before = game.clone();
        assert_eq!(game.select(99, at(0)), Selection::Ignored);
        assert_eq!(game, before);

        // already flipped
        game.select(a, at(0));
        let before = game.clone();
        assert_eq!(game.select(a, at(1)), Selection::Ignored);
        assert_eq!(game, before);

        // two pending
        let res = expect_pending(game.select(b, at(1)));
        let before = game.clone();
        assert_eq!(game.select(x, at(2)), Selection::Ignored);
        assert_eq!(game, before);

        // already matched
        game.resolve(res, at(2));
        let before = game.clone();
        assert_eq!(game.select(a, at(3)), Selection::Ignored);
        assert_eq!(game.select(b, at(3)), Selection::Ignored);
        assert_eq!(game, before);
    }

    #[test]
    fn test_only_effective_selections_report_a_change() {
        let mut game = seeded(12);
        let (a, b) = ids_for(&game, "■");
        let (x, _) = ids_for(&game, "●");

        assert!(!game.select(99, at(0)).changed());
        assert!(game.select(a, at(0)).changed());
        assert!(!game.select(a, at(1)).changed());
        let res = game.select(b, at(1));
        assert!(res.changed());
        assert!(!game.select(x, at(2)).changed());

        game.resolve(expect_pending(res), at(2));
        assert!(!game.select(a, at(3)).changed());
    }

    #[test]
    fn test_card_faces_are_fixed_by_id() {
        let mut game = seeded(13);
        for _ in 0..3 {
            for card in game.deck() {
                let face = face_of(card.id).expect("every dealt id has a face");
                assert_eq!((face.symbol, face.color), (card.symbol, card.color));
            }
            game.reset_with_rng(&mut SmallRng::seed_from_u64(game.generation() + 20));
        }
        assert_eq!(face_of(DECK_SIZE), None);
    }

    #[test]
    fn test_entropy_decks_vary() {
        let orders = (0..4)
            .map(|_| Game::new().deck().iter().map(|c| c.id).collect::<Vec<_>>())
            .collect::<HashSet<_>>();
        assert!(orders.len() > 1, "unseeded decks should not repeat");
    }

    #[test]
    fn test_start_time_set_by_first_valid_flip() {
        let mut game = seeded(5);
        game.select(1000, at(3));
        assert_eq!(game.started_at(), None);

        let (a, _) = ids_for(&game, "◉");
        let (b, _) = ids_for(&game, "⬟");
        game.select(a, at(5));
        game.select(b, at(9));
        assert_eq!(game.started_at(), Some(at(5)));
        assert_eq!(game.elapsed(at(65)), TimeDelta::seconds(60));
    }

    #[test]
    fn test_full_game_wins_and_freezes() {
        let mut game = seeded(21);
        let mut last = 0;
        for (i, face) in FACES.iter().enumerate() {
            assert!(!game.is_won());
            play_pair(&mut game, face.symbol, at(i as i64 * 10));
            assert!(game.matched_pairs() >= last);
            last = game.matched_pairs();
        }

        assert!(game.is_won());
        assert_eq!(game.phase(), Phase::Won);
        assert_eq!(game.matched_pairs(), PAIR_COUNT);
        assert_eq!(game.moves(), 16);
        assert!(game.deck().iter().all(|c| c.is_matched));

        let frozen = game.elapsed(at(70));
        assert_eq!(frozen, TimeDelta::seconds(70));
        assert_eq!(game.elapsed(at(500)), frozen);

        let before = game.clone();
        for id in 0..DECK_SIZE {
            assert_eq!(game.select(id, at(600)), Selection::Ignored);
        }
        assert_eq!(game, before);
    }

    #[test]
    fn test_reset_restores_fresh_state() {
        let mut game = seeded(9);
        play_pair(&mut game, "◈", at(0));
        let (a, _) = ids_for(&game, "◆");
        game.select(a, at(1));

        let before = game.deck().iter().map(|c| c.id).collect::<Vec<_>>();
        game.reset_with_rng(&mut SmallRng::seed_from_u64(10));
        let after = game.deck().iter().map(|c| c.id).collect::<Vec<_>>();
        assert_ne!(before, after);

        let mut ids = after;
        ids.sort_unstable();
        assert_eq!(ids, (0..DECK_SIZE).collect::<Vec<_>>());
        for face in FACES {
            let count = game.deck().iter().filter(|c| c.symbol == face.symbol).count();
            assert_eq!(count, 2, "{} should appear twice", face.symbol);
        }

        assert_eq!(game.moves(), 0);
        assert_eq!(game.matched_pairs(), 0);
        assert!(!game.is_won());
        assert!(game.pending().is_empty());
        assert_eq!(game.phase(), Phase::Idle);
        assert_eq!(game.deck().len(), DECK_SIZE);
        assert!(game.deck().iter().all(|c| !c.is_revealed()));
        assert_eq!(game.generation(), 1);
    }

    #[test]
    fn test_stale_resolution_after_reset_is_discarded() {
        let mut game = seeded(13);
        let (a, b) = ids_for(&game, "●");
        game.select(a, at(0));
        let res = expect_pending(game.select(b, at(1)));

        game.reset_with_rng(&mut SmallRng::seed_from_u64(13));
        // same seed, so the same ids are now pending in the fresh deck
        game.select(a, at(2));
        game.select(b, at(2));
        let before = game.clone();

        assert!(!game.resolve(res, at(3)));
        assert_eq!(game, before);
        assert_eq!(game.matched_pairs(), 0);
    }

    #[test]
    fn test_resolution_only_applies_once() {
        let mut game = seeded(17);
        let (a, b) = ids_for(&game, "■");
        game.select(a, at(0));
        let res = expect_pending(game.select(b, at(0)));

        assert!(game.resolve(res, at(1)));
        assert!(!game.resolve(res, at(1)));
        assert_eq!(game.matched_pairs(), 1);
    }

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(0), "0:00");
        assert_eq!(format_elapsed(9), "0:09");
        assert_eq!(format_elapsed(75), "1:15");
        assert_eq!(format_elapsed(600), "10:00");
        assert_eq!(format_elapsed(-4), "0:00");
    }
}

//! The guessing-game session core.
//!
//! One [`GameSession`] per player session. Every operation is a total
//! function: malformed country records degrade by omission rather than
//! erroring, and exhaustion of the candidate pool is an `Option`, not a
//! failure.

use std::collections::HashSet;

use crate::entities::Country;

/// Injected randomness seam for country selection.
///
/// Implementations must return a uniformly distributed index in `0..len`.
/// Callers guarantee `len > 0`. The engine provides a `thread_rng`-backed
/// implementation; tests inject deterministic ones.
pub trait RandomPort: Send + Sync {
    fn pick_index(&self, len: usize) -> usize;
}

/// Per-session game state: score, the country in play, and the set of
/// country names already used this session.
#[derive(Debug, Default)]
pub struct GameSession {
    score: i32,
    current_country: Option<Country>,
    played_names: HashSet<String>,
}

impl GameSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Picks an unplayed country uniformly at random.
    ///
    /// Candidates are records with a common name not yet in the played set;
    /// nameless records are skipped outright since they can never be
    /// guessed. On success the pick becomes the current country and its name
    /// joins the played set. Returns `None` without touching any state when
    /// no candidate remains.
    pub fn select_next(
        &mut self,
        countries: &[Country],
        rng: &dyn RandomPort,
    ) -> Option<&Country> {
        let candidates: Vec<&Country> = countries
            .iter()
            .filter(|c| {
                c.common_name()
                    .is_some_and(|name| !self.played_names.contains(name))
            })
            .collect();

        if candidates.is_empty() {
            return None;
        }
        let picked = *candidates.get(rng.pick_index(candidates.len()))?;
        if let Some(name) = picked.common_name() {
            self.played_names.insert(name.to_string());
        }
        self.current_country = Some(picked.clone());
        self.current_country.as_ref()
    }

    /// Hints for the country in play; empty when no round is active.
    pub fn hints(&self) -> Vec<String> {
        self.current_country
            .as_ref()
            .map(Country::hints)
            .unwrap_or_default()
    }

    /// Evaluates a guess against the country in play.
    ///
    /// False when no round is active or the record has no name. Does not
    /// mutate state; scoring is the caller's single `update_score` call.
    pub fn check_guess(&self, guess: &str) -> bool {
        self.current_country
            .as_ref()
            .is_some_and(|c| c.matches_guess(guess))
    }

    /// Adds `delta` to the score. Unclamped; the score may go negative.
    pub fn update_score(&mut self, delta: i32) {
        self.score += delta;
    }

    /// Returns the session to its initial state. Idempotent.
    pub fn reset(&mut self) {
        self.score = 0;
        self.current_country = None;
        self.played_names.clear();
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn current_country(&self) -> Option<&Country> {
        self.current_country.as_ref()
    }

    pub fn played_names(&self) -> &HashSet<String> {
        &self.played_names
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    /// Always picks index 0.
    struct FirstPick;

    impl RandomPort for FirstPick {
        fn pick_index(&self, _len: usize) -> usize {
            0
        }
    }

    /// Cycles through indices so successive picks differ when possible.
    struct CyclingPick(AtomicUsize);

    impl CyclingPick {
        fn new() -> Self {
            Self(AtomicUsize::new(0))
        }
    }

    impl RandomPort for CyclingPick {
        fn pick_index(&self, len: usize) -> usize {
            self.0.fetch_add(1, Ordering::Relaxed) % len
        }
    }

    fn named(name: &str) -> Country {
        serde_json::from_value(serde_json::json!({ "name": { "common": name } }))
            .expect("valid country json")
    }

    #[test]
    fn selection_never_repeats_a_name() {
        let countries: Vec<Country> = ["Spain", "France", "Italy", "Portugal"]
            .iter()
            .map(|n| named(n))
            .collect();
        let mut session = GameSession::new();
        let rng = CyclingPick::new();

        let mut seen = HashSet::new();
        for _ in 0..countries.len() {
            let picked = session
                .select_next(&countries, &rng)
                .and_then(Country::common_name)
                .map(str::to_string)
                .expect("candidates remain");
            assert!(seen.insert(picked), "country selected twice");
        }
        assert_eq!(session.played_names().len(), countries.len());
    }

    #[test]
    fn exhausted_selection_returns_none_without_mutation() {
        let countries = vec![named("Spain")];
        let mut session = GameSession::new();

        assert!(session.select_next(&countries, &FirstPick).is_some());
        let played_before = session.played_names().clone();

        assert!(session.select_next(&countries, &FirstPick).is_none());
        assert_eq!(session.played_names(), &played_before);
        assert_eq!(
            session.current_country().and_then(Country::common_name),
            Some("Spain"),
            "current country survives an exhausted select"
        );
    }

    #[test]
    fn selection_on_empty_list_returns_none() {
        let mut session = GameSession::new();
        assert!(session.select_next(&[], &FirstPick).is_none());
        assert!(session.played_names().is_empty());
        assert!(session.current_country().is_none());
    }

    #[test]
    fn selection_skips_nameless_records() {
        let countries = vec![Country::default(), named("Spain")];
        let mut session = GameSession::new();

        let picked = session
            .select_next(&countries, &FirstPick)
            .and_then(Country::common_name)
            .map(str::to_string);
        assert_eq!(picked.as_deref(), Some("Spain"));
        assert!(session.select_next(&countries, &FirstPick).is_none());
    }

    #[test]
    fn two_country_round_trip_exhausts_in_order() {
        // After México is played, España is the forced pick.
        let countries = vec![named("México"), named("España")];
        let mut session = GameSession::new();
        let rng = FirstPick;

        let first = session
            .select_next(&countries, &rng)
            .and_then(Country::common_name)
            .map(str::to_string)
            .expect("first pick");
        assert!(session.played_names().contains(&first));

        let second = session
            .select_next(&countries, &rng)
            .and_then(Country::common_name)
            .map(str::to_string)
            .expect("second pick");
        assert_ne!(first, second);
        assert_eq!(session.played_names().len(), 2);

        assert!(session.select_next(&countries, &rng).is_none());
    }

    #[test]
    fn hints_are_empty_without_a_round() {
        let session = GameSession::new();
        assert!(session.hints().is_empty());
    }

    #[test]
    fn hints_come_from_the_current_country() {
        let countries: Vec<Country> = vec![serde_json::from_value(serde_json::json!({
            "name": { "common": "Spain" },
            "region": "Europe",
            "capital": ["Madrid"],
            "population": 47351567u64,
            "languages": { "spa": "Spanish" }
        }))
        .expect("valid country json")];
        let mut session = GameSession::new();
        session.select_next(&countries, &FirstPick);
        assert_eq!(session.hints().len(), 4);
        assert_eq!(session.hints()[0], "This country is in Europe");
    }

    #[test]
    fn guess_is_false_without_a_round() {
        let session = GameSession::new();
        assert!(!session.check_guess("Spain"));
    }

    #[test]
    fn guess_checks_the_current_country_case_insensitively() {
        let countries = vec![named("Spain")];
        let mut session = GameSession::new();
        session.select_next(&countries, &FirstPick);
        assert!(session.check_guess("spain"));
        assert!(session.check_guess("Spain"));
        assert!(!session.check_guess("Spai"));
    }

    #[test]
    fn score_accumulates_without_clamping() {
        let mut session = GameSession::new();
        session.update_score(10);
        session.update_score(-1);
        session.update_score(-1);
        assert_eq!(session.score(), 8);

        session.update_score(-20);
        assert_eq!(session.score(), -12);
    }

    #[test]
    fn reset_is_idempotent() {
        let countries = vec![named("Spain"), named("France")];
        let mut session = GameSession::new();
        session.select_next(&countries, &FirstPick);
        session.update_score(10);

        session.reset();
        assert_eq!(session.score(), 0);
        assert!(session.current_country().is_none());
        assert!(session.played_names().is_empty());

        session.reset();
        assert_eq!(session.score(), 0);
        assert!(session.current_country().is_none());
        assert!(session.played_names().is_empty());
    }

    #[test]
    fn reset_makes_played_countries_selectable_again() {
        let countries = vec![named("Spain")];
        let mut session = GameSession::new();
        session.select_next(&countries, &FirstPick);
        assert!(session.select_next(&countries, &FirstPick).is_none());

        session.reset();
        assert!(session.select_next(&countries, &FirstPick).is_some());
    }
}

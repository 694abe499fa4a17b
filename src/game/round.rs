use std::collections::BTreeSet;

use chrono::{DateTime, TimeDelta, Utc};
use tracing::{debug, info};
use uuid::Uuid;

use super::evaluator::{GuessResult, ScoringRules, evaluate};
use super::hint::{HintCosts, HintKind};
use crate::scene::types::Scene;

/// One play-through of a scene, from acquisition to the single guess.
///
/// A round is `Active` until a guess is submitted, then `Guessed` for good: hint
/// reveals and further guesses become no-ops.
#[derive(Debug, Clone)]
pub struct Round {
    id: Uuid,
    scene: Scene,
    points_remaining: u32,
    revealed_hints: BTreeSet<HintKind>,
    is_guessed: bool,
    is_won: bool,
    result: Option<GuessResult>,
    started_at: DateTime<Utc>,
    guessed_at: Option<DateTime<Utc>>,
}

impl Round {
    pub fn new(scene: Scene, starting_points: u32) -> Self {
        let id = Uuid::new_v4();
        debug!("Round {} started on {}", id, scene.episode_key);
        Self {
            id,
            scene,
            points_remaining: starting_points,
            revealed_hints: BTreeSet::new(),
            is_guessed: false,
            is_won: false,
            result: None,
            started_at: Utc::now(),
            guessed_at: None,
        }
    }

    /// Buys a hint. Returns `false` without changing anything if the round is
    /// already guessed or the hint was already revealed.
    pub fn reveal_hint(&mut self, kind: HintKind, costs: &HintCosts) -> bool {
        if self.is_guessed || self.revealed_hints.contains(&kind) {
            return false;
        }

        self.points_remaining = self.points_remaining.saturating_sub(costs.cost(kind));
        self.revealed_hints.insert(kind);
        debug!(
            "Round {} revealed {} hint, {} points left",
            self.id, kind, self.points_remaining
        );
        true
    }

    /// Submits the round's one guess. Returns `None` if the round was already
    /// guessed or `text` is blank.
    pub fn submit_guess(
        &mut self,
        text: &str,
        guessed_season: Option<u32>,
        guessed_episode_number: Option<u32>,
        rules: &ScoringRules,
    ) -> Option<&GuessResult> {
        if self.is_guessed || text.trim().is_empty() {
            return None;
        }

        self.is_guessed = true;
        let guessed_at = Utc::now();
        self.guessed_at = Some(guessed_at);
        let result = evaluate(
            self.points_remaining,
            &self.scene,
            text,
            guessed_season,
            guessed_episode_number,
            rules,
        );
        self.is_won = result.is_correct;
        if !self.is_won {
            self.points_remaining = 0;
        }
        self.points_remaining = self.points_remaining.saturating_add(result.bonus_points);

        info!(
            "Round {} guessed {:?} after {}s: correct={} similarity={:.2} points={}",
            self.id,
            text,
            (guessed_at - self.started_at).num_seconds(),
            result.is_correct,
            result.similarity_score,
            result.final_round_points
        );
        self.result = Some(result);
        self.result.as_ref()
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn points_remaining(&self) -> u32 {
        self.points_remaining
    }

    pub fn revealed_hints(&self) -> impl Iterator<Item = HintKind> + '_ {
        self.revealed_hints.iter().copied()
    }

    pub fn is_revealed(&self, kind: HintKind) -> bool {
        self.revealed_hints.contains(&kind)
    }

    pub fn is_guessed(&self) -> bool {
        self.is_guessed
    }

    pub fn is_won(&self) -> bool {
        self.is_won
    }

    pub fn result(&self) -> Option<&GuessResult> {
        self.result.as_ref()
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Time from the round starting to its guess; `None` while still active.
    pub fn time_taken(&self) -> Option<TimeDelta> {
        self.guessed_at.map(|guessed_at| guessed_at - self.started_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scene() -> Scene {
        Scene {
            episode_key: "S01E11".to_string(),
            season: 1,
            episode_number: 11,
            title: "The Crepes of Wrath".to_string(),
            frame_timestamp_ms: 1000,
            quote_text: "I didn't know you could smoke four at once".to_string(),
        }
    }

    #[test]
    fn test_new_round_is_active() {
        let round = Round::new(scene(), 100);
        assert_eq!(round.points_remaining(), 100);
        assert_eq!(round.revealed_hints().count(), 0);
        assert!(!round.is_guessed());
        assert!(!round.is_won());
        assert!(round.result().is_none());
    }

    #[test]
    fn test_hint_reveals_deduct_once() {
        let costs = HintCosts::default();
        let mut round = Round::new(scene(), 100);

        assert!(round.reveal_hint(HintKind::Season, &costs));
        assert!(round.reveal_hint(HintKind::Image, &costs));
        assert_eq!(round.points_remaining(), 50);

        assert!(!round.reveal_hint(HintKind::Season, &costs));
        assert_eq!(round.points_remaining(), 50);
        assert!(round.is_revealed(HintKind::Season));
        assert!(!round.is_revealed(HintKind::EpisodeNumber));
    }

    #[test]
    fn test_points_floor_at_zero() {
        let costs = HintCosts {
            image: 80,
            season: 80,
            episode_number: 80,
        };
        let mut round = Round::new(scene(), 100);
        round.reveal_hint(HintKind::Image, &costs);
        round.reveal_hint(HintKind::Season, &costs);
        assert_eq!(round.points_remaining(), 0);
        assert_eq!(round.revealed_hints().count(), 2);
    }

    #[test]
    fn test_correct_guess_wins_remaining_points() {
        let mut round = Round::new(scene(), 100);
        round.reveal_hint(HintKind::Season, &HintCosts::default());

        let result = round
            .submit_guess("the crepes of wrath", None, None, &ScoringRules::default())
            .cloned()
            .unwrap();

        assert!(result.is_correct);
        assert_eq!(result.final_round_points, 80);
        assert!(round.is_guessed());
        assert!(round.is_won());
        assert_eq!(round.points_remaining(), 80);
    }

    #[test]
    fn test_wrong_title_zeroes_base_but_keeps_bonus() {
        let mut round = Round::new(scene(), 100);
        let result = round
            .submit_guess("Moaning Lisa", Some(1), None, &ScoringRules::default())
            .cloned()
            .unwrap();

        assert!(!result.is_correct);
        assert_eq!(result.final_round_points, 25);
        assert!(!round.is_won());
        assert_eq!(round.points_remaining(), 25);
    }

    #[test]
    fn test_guessed_round_is_terminal() {
        let rules = ScoringRules::default();
        let mut round = Round::new(scene(), 100);
        round.submit_guess("Moaning Lisa", None, None, &rules);

        assert!(round.submit_guess("The Crepes of Wrath", None, None, &rules).is_none());
        assert!(!round.reveal_hint(HintKind::Image, &HintCosts::default()));
        assert!(!round.is_won());
        assert_eq!(round.points_remaining(), 0);
    }

    #[test]
    fn test_time_taken_is_set_by_guess() {
        let mut round = Round::new(scene(), 100);
        assert!(round.time_taken().is_none());

        round.submit_guess("Moaning Lisa", None, None, &ScoringRules::default());
        let taken = round.time_taken().unwrap();
        assert!(taken >= TimeDelta::zero());
        assert!(round.started_at() + taken <= Utc::now());

        // A rejected second guess leaves the recorded time alone
        round.submit_guess("The Crepes of Wrath", None, None, &ScoringRules::default());
        assert_eq!(round.time_taken(), Some(taken));
    }

    #[test]
    fn test_bonus_saturates_instead_of_overflowing() {
        let rules = ScoringRules {
            season_bonus: u32::MAX,
            ..ScoringRules::default()
        };
        let mut round = Round::new(scene(), 100);
        let result = round
            .submit_guess("The Crepes of Wrath", Some(1), None, &rules)
            .cloned()
            .unwrap();
        assert_eq!(result.final_round_points, u32::MAX);
        assert_eq!(round.points_remaining(), u32::MAX);
    }

    #[test]
    fn test_blank_guess_is_ignored() {
        let mut round = Round::new(scene(), 100);
        assert!(round.submit_guess("   ", Some(1), None, &ScoringRules::default()).is_none());
        assert!(!round.is_guessed());
        assert_eq!(round.points_remaining(), 100);
    }
}

use serde::{Deserialize, Serialize};

use crate::matching::similarity;
use crate::scene::types::Scene;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringRules {
    pub similarity_threshold: f64,
    pub season_bonus: u32,
    pub episode_bonus: u32,
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            similarity_threshold: 0.75,
            season_bonus: 25,
            episode_bonus: 25,
        }
    }
}

/// Outcome of the single guess a round allows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuessResult {
    pub is_correct: bool,
    pub similarity_score: f64,
    pub bonus_points: u32,
    pub bonus_notes: Vec<String>,
    pub final_round_points: u32,
}

/// Scores a title guess plus the optional season / episode-number guesses.
///
/// Structured bonuses are awarded whether or not the title matched; a wrong title
/// only forfeits `round_points`.
pub fn evaluate(
    round_points: u32,
    scene: &Scene,
    guess_text: &str,
    guessed_season: Option<u32>,
    guessed_episode_number: Option<u32>,
    rules: &ScoringRules,
) -> GuessResult {
    let similarity_score = similarity(guess_text, &scene.title);
    let is_correct = similarity_score >= rules.similarity_threshold;

    let mut bonus_points: u32 = 0;
    let mut bonus_notes = Vec::new();

    if let Some(season) = guessed_season {
        if season == scene.season {
            bonus_points = bonus_points.saturating_add(rules.season_bonus);
            bonus_notes.push(format!("Correct season (+{})", rules.season_bonus));
        } else {
            bonus_notes.push(format!("Wrong season: it was season {}", scene.season));
        }
    }

    if let Some(episode_number) = guessed_episode_number {
        if episode_number == scene.episode_number {
            bonus_points = bonus_points.saturating_add(rules.episode_bonus);
            bonus_notes.push(format!("Correct episode number (+{})", rules.episode_bonus));
        } else {
            bonus_notes.push(format!(
                "Wrong episode number: it was episode {}",
                scene.episode_number
            ));
        }
    }

    let base = if is_correct { round_points } else { 0 };

    GuessResult {
        is_correct,
        similarity_score,
        bonus_points,
        bonus_notes,
        final_round_points: base.saturating_add(bonus_points),
    }
}

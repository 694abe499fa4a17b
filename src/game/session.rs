use serde::{Deserialize, Serialize};

/// Running totals for the player's visit. Never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub total_points: u64,
    pub rounds_played: u32,
    pub rounds_won: u32,
}

impl SessionState {
    pub fn record_round(self, final_round_points: u32, won: bool) -> Self {
        Self {
            total_points: self.total_points + u64::from(final_round_points),
            rounds_played: self.rounds_played + 1,
            rounds_won: self.rounds_won + u32::from(won),
        }
    }

    /// Mean points per round, `None` before the first round.
    pub fn average(&self) -> Option<f64> {
        (self.rounds_played > 0).then(|| self.total_points as f64 / f64::from(self.rounds_played))
    }

    pub fn win_rate(&self) -> Option<f64> {
        (self.rounds_played > 0).then(|| f64::from(self.rounds_won) / f64::from(self.rounds_played))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_session_has_no_average() {
        let session = SessionState::default();
        assert_eq!(session.average(), None);
        assert_eq!(session.win_rate(), None);
    }

    #[test]
    fn test_record_rounds() {
        let session = SessionState::default()
            .record_round(80, true)
            .record_round(40, false);
        assert_eq!(session.total_points, 120);
        assert_eq!(session.rounds_played, 2);
        assert_eq!(session.rounds_won, 1);
        assert_eq!(session.average(), Some(60.0));
        assert_eq!(session.win_rate(), Some(0.5));
    }

    #[test]
    fn test_zero_point_round_still_counts() {
        let session = SessionState::default().record_round(0, false);
        assert_eq!(session.rounds_played, 1);
        assert_eq!(session.average(), Some(0.0));
    }
}

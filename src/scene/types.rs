use serde::{Deserialize, Serialize};

/// One quote + screenshot unit, tied to an episode and a frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scene {
    pub episode_key: String,
    pub season: u32,
    pub episode_number: u32,
    pub title: String,
    pub frame_timestamp_ms: u64,
    pub quote_text: String,
}

impl Scene {
    /// Screenshot location for the Image hint.
    pub fn image_url(&self, base_url: &str) -> String {
        format!(
            "{}/{}/{}.jpg",
            base_url.trim_end_matches('/'),
            self.episode_key,
            self.frame_timestamp_ms
        )
    }

    pub fn timestamp_label(&self) -> String {
        let total_seconds = self.frame_timestamp_ms / 1000;
        format!("{}:{:02}", total_seconds / 60, total_seconds % 60)
    }
}

/// Inclusive range of seasons a scene may come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonRange {
    pub min: u32,
    pub max: u32,
}

impl SeasonRange {
    /// Builds a range with both ends clamped into `bounds`, swapping them if given inverted.
    pub fn new(min: u32, max: u32, bounds: SeasonRange) -> Self {
        let (low, high) = if min <= max { (min, max) } else { (max, min) };
        Self {
            min: low.clamp(bounds.min, bounds.max),
            max: high.clamp(bounds.min, bounds.max),
        }
    }

    pub fn contains(&self, season: u32) -> bool {
        (self.min..=self.max).contains(&season)
    }
}

impl std::fmt::Display for SeasonRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "seasons {}-{}", self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: SeasonRange = SeasonRange { min: 1, max: 20 };

    fn scene() -> Scene {
        Scene {
            episode_key: "S01E11".to_string(),
            season: 1,
            episode_number: 11,
            title: "The Crepes of Wrath".to_string(),
            frame_timestamp_ms: 754_321,
            quote_text: "Hello".to_string(),
        }
    }

    #[test]
    fn test_season_range_clamps_and_orders() {
        assert_eq!(SeasonRange::new(0, 40, BOUNDS), SeasonRange { min: 1, max: 20 });
        assert_eq!(SeasonRange::new(9, 3, BOUNDS), SeasonRange { min: 3, max: 9 });
        assert_eq!(SeasonRange::new(25, 30, BOUNDS), SeasonRange { min: 20, max: 20 });
    }

    #[test]
    fn test_season_range_contains_is_inclusive() {
        let range = SeasonRange::new(2, 5, BOUNDS);
        assert!(range.contains(2));
        assert!(range.contains(5));
        assert!(!range.contains(1));
        assert!(!range.contains(6));
    }

    #[test]
    fn test_image_url_and_timestamp_label() {
        let scene = scene();
        assert_eq!(
            scene.image_url("https://frinkiac.com/img/"),
            "https://frinkiac.com/img/S01E11/754321.jpg"
        );
        assert_eq!(scene.timestamp_label(), "12:34");
    }
}

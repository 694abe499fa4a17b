use serde::{Deserialize, Serialize};

use crate::scene::types::Scene;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HintKind {
    Image,
    Season,
    EpisodeNumber,
}

impl HintKind {
    /// Text shown to the player once the hint is revealed.
    pub fn reveal(&self, scene: &Scene, image_base_url: &str) -> String {
        match self {
            HintKind::Image => scene.image_url(image_base_url),
            HintKind::Season => format!("Season {}", scene.season),
            HintKind::EpisodeNumber => format!("Episode {}", scene.episode_number),
        }
    }
}

impl std::fmt::Display for HintKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            HintKind::Image => "image",
            HintKind::Season => "season",
            HintKind::EpisodeNumber => "episode number",
        };
        f.write_str(name)
    }
}

/// Point cost of each hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HintCosts {
    pub image: u32,
    pub season: u32,
    pub episode_number: u32,
}

impl Default for HintCosts {
    fn default() -> Self {
        Self {
            image: 30,
            season: 20,
            episode_number: 20,
        }
    }
}

impl HintCosts {
    pub fn cost(&self, kind: HintKind) -> u32 {
        match kind {
            HintKind::Image => self.image,
            HintKind::Season => self.season,
            HintKind::EpisodeNumber => self.episode_number,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cost_lookup() {
        let costs = HintCosts::default();
        assert_eq!(costs.cost(HintKind::Image), 30);
        assert_eq!(costs.cost(HintKind::Season), 20);
        assert_eq!(costs.cost(HintKind::EpisodeNumber), 20);
    }

    #[test]
    fn test_reveal_text() {
        let scene = Scene {
            episode_key: "S03E24".to_string(),
            season: 3,
            episode_number: 24,
            title: "Brother, Can You Spare Two Dimes?".to_string(),
            frame_timestamp_ms: 90_500,
            quote_text: "Do you want to be rich?".to_string(),
        };
        assert_eq!(HintKind::Season.reveal(&scene, "http://img"), "Season 3");
        assert_eq!(HintKind::EpisodeNumber.reveal(&scene, "http://img"), "Episode 24");
        assert_eq!(
            HintKind::Image.reveal(&scene, "http://img"),
            "http://img/S03E24/90500.jpg"
        );
    }
}

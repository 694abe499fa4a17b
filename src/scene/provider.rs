//! Wire model of the clip provider's random-scene payload.

use serde::Deserialize;

use super::types::Scene;
use crate::error::AcquisitionError;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProviderScene {
    pub episode: ProviderEpisode,
    pub frame: ProviderFrame,
    #[serde(default)]
    pub subtitles: Vec<ProviderSubtitle>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProviderEpisode {
    pub key: String,
    pub season: u32,
    pub episode_number: u32,
    pub title: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProviderFrame {
    pub timestamp: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProviderSubtitle {
    pub content: String,
}

impl From<ProviderScene> for Scene {
    fn from(raw: ProviderScene) -> Self {
        let quote_text = raw
            .subtitles
            .iter()
            .map(|subtitle| subtitle.content.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        Scene {
            episode_key: raw.episode.key,
            season: raw.episode.season,
            episode_number: raw.episode.episode_number,
            title: raw.episode.title,
            frame_timestamp_ms: raw.frame.timestamp,
            quote_text,
        }
    }
}

pub fn parse_scene(json: &str) -> Result<Scene, AcquisitionError> {
    serde_json::from_str::<ProviderScene>(json)
        .map(Scene::from)
        .map_err(|e| AcquisitionError::FetchFailed(format!("malformed provider payload: {e}")))
}

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

use crate::error::AppError;
use crate::game::evaluator::ScoringRules;
use crate::game::hint::HintCosts;
use crate::scene::acquisition::DEFAULT_MAX_ATTEMPTS;
use crate::scene::types::SeasonRange;

const CONFIG_FILE: &str = "quotequiz";
const ENV_PREFIX: &str = "QUOTEQUIZ";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub starting_points: u32,
    pub hint_costs: HintCosts,
    pub season_bonus: u32,
    pub episode_bonus: u32,
    pub similarity_threshold: f64,
    pub min_words: usize,
    pub max_attempts: u32,
    /// Seasons the provider actually serves. Player ranges are clamped into these.
    pub season_bounds: SeasonRange,
    pub default_range: SeasonRange,
    pub fetch_timeout_ms: Option<u64>,
    pub replay_path: PathBuf,
    pub image_base_url: String,
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            starting_points: 100,
            hint_costs: HintCosts::default(),
            season_bonus: 25,
            episode_bonus: 25,
            similarity_threshold: 0.75,
            min_words: 5,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            season_bounds: SeasonRange { min: 1, max: 20 },
            default_range: SeasonRange { min: 1, max: 20 },
            fetch_timeout_ms: None,
            replay_path: PathBuf::from("data/scenes.json"),
            image_base_url: "https://frinkiac.com/img".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl Settings {
    /// Loads `quotequiz.toml` (if present) layered under `QUOTEQUIZ__*` environment variables.
    pub fn load() -> Result<Self, AppError> {
        let settings: Settings = config::Config::builder()
            .add_source(config::File::with_name(CONFIG_FILE).required(false))
            .add_source(Self::environment())
            .build()?
            .try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// `QUOTEQUIZ__MIN_WORDS=3`, `QUOTEQUIZ__HINT_COSTS__IMAGE=10`, ...
    fn environment() -> config::Environment {
        config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if !(0.0..=1.0).contains(&self.similarity_threshold) {
            return Err(AppError::InvalidSettings(
                "Similarity threshold must be between 0.0 and 1.0".to_string(),
            ));
        }

        if self.max_attempts == 0 {
            return Err(AppError::InvalidSettings(
                "Max attempts must be greater than 0".to_string(),
            ));
        }

        if self.season_bounds.min > self.season_bounds.max {
            return Err(AppError::InvalidSettings(format!(
                "Season bounds are inverted: {}..{}",
                self.season_bounds.min, self.season_bounds.max
            )));
        }

        Ok(())
    }

    pub fn scoring_rules(&self) -> ScoringRules {
        ScoringRules {
            similarity_threshold: self.similarity_threshold,
            season_bonus: self.season_bonus,
            episode_bonus: self.episode_bonus,
        }
    }

    pub fn fetch_timeout(&self) -> Option<Duration> {
        self.fetch_timeout_ms.map(Duration::from_millis)
    }

    /// The starting range, clamped into the provider's bounds.
    pub fn initial_range(&self) -> SeasonRange {
        SeasonRange::new(self.default_range.min, self.default_range.max, self.season_bounds)
    }
}

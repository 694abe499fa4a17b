use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::Mutex;
use tower::BoxError;
use tower::util::BoxCloneService;
use tracing::{info, warn};

use super::evaluator::GuessResult;
use super::hint::HintKind;
use super::round::Round;
use super::session::SessionState;
use crate::config::Settings;
use crate::error::{AcquisitionError, AppError};
use crate::scene::acquisition::acquire_valid_scene;
use crate::scene::source::{FetchService, SceneSource};
use crate::scene::types::{Scene, SeasonRange};
use crate::scene::validator::SceneValidator;

/// Owns the current round and the session totals, and is the only thing that mutates them.
pub struct GameController {
    settings: Settings,
    season_range: SeasonRange,
    fetch: BoxCloneService<(), Scene, BoxError>,
    round: Option<Round>,
    session: SessionState,
}

/// A pending scene acquisition, detached from the controller that prepared it.
pub struct Acquisition {
    fetch: BoxCloneService<(), Scene, BoxError>,
    validator: SceneValidator,
    max_attempts: u32,
}

impl Acquisition {
    pub async fn run(mut self) -> Result<Scene, AcquisitionError> {
        acquire_valid_scene(&mut self.fetch, &self.validator, self.max_attempts).await
    }
}

impl GameController {
    pub fn new(settings: Settings, source: Arc<dyn SceneSource>) -> Self {
        let fetch = FetchService::boxed(source, settings.fetch_timeout());
        Self {
            season_range: settings.initial_range(),
            settings,
            fetch,
            round: None,
            session: SessionState::default(),
        }
    }

    /// Changes the seasons future rounds are drawn from. Ends are clamped to the
    /// provider's bounds.
    pub fn set_season_range(&mut self, min: u32, max: u32) -> SeasonRange {
        self.season_range = SeasonRange::new(min, max, self.settings.season_bounds);
        info!("Season range set to {}", self.season_range);
        self.season_range
    }

    /// Acquires a scene and replaces the current round with a fresh one.
    ///
    /// An unguessed round being replaced is abandoned without touching the
    /// session. On failure the current round is left as it was.
    pub async fn start_new_round(&mut self) -> Result<&Round, AppError> {
        let scene = self.prepare_acquisition().run().await?;
        Ok(self.install_round(scene))
    }

    /// Snapshot of the fetch service and the current acceptance rules.
    pub fn prepare_acquisition(&self) -> Acquisition {
        Acquisition {
            fetch: self.fetch.clone(),
            validator: SceneValidator::new(self.season_range, self.settings.min_words),
            max_attempts: self.settings.max_attempts,
        }
    }

    pub fn install_round(&mut self, scene: Scene) -> &Round {
        if let Some(previous) = &self.round {
            if !previous.is_guessed() {
                warn!("Abandoning unguessed round {}", previous.id());
            }
        }

        let round = Round::new(scene, self.settings.starting_points);
        info!("Round {} started ({})", round.id(), self.season_range);
        self.round.insert(round)
    }

    /// Reveals a hint on the active round, returning its text. `None` when there is
    /// no active round or the hint was already bought.
    pub fn reveal_hint(&mut self, kind: HintKind) -> Option<String> {
        let round = self.round.as_mut()?;
        if !round.reveal_hint(kind, &self.settings.hint_costs) {
            return None;
        }
        Some(kind.reveal(round.scene(), &self.settings.image_base_url))
    }

    /// Submits the active round's guess and folds the outcome into the session.
    pub fn submit_guess(
        &mut self,
        text: &str,
        guessed_season: Option<u32>,
        guessed_episode_number: Option<u32>,
    ) -> Option<GuessResult> {
        let rules = self.settings.scoring_rules();
        let round = self.round.as_mut()?;
        let result = round
            .submit_guess(text, guessed_season, guessed_episode_number, &rules)?
            .clone();

        self.session = self
            .session
            .record_round(result.final_round_points, result.is_correct);
        info!(
            "Session: {} points over {} rounds",
            self.session.total_points, self.session.rounds_played
        );
        Some(result)
    }

    pub fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    pub fn session(&self) -> SessionState {
        self.session
    }

    pub fn season_range(&self) -> SeasonRange {
        self.season_range
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}

/// Cloneable handle for an event-driven front end. Allows at most one
/// acquisition in flight. The controller is not locked while the fetch runs;
/// a second `start_new_round`, a hint or a guess issued meanwhile is rejected
/// with `AcquisitionInProgress`.
#[derive(Clone)]
pub struct SharedGame {
    inner: Arc<Mutex<GameController>>,
    acquiring: Arc<AtomicBool>,
}

struct InFlight<'a>(&'a AtomicBool);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

impl SharedGame {
    pub fn new(controller: GameController) -> Self {
        Self {
            inner: Arc::new(Mutex::new(controller)),
            acquiring: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.acquiring.load(Ordering::SeqCst)
    }

    /// Starts a round and returns a snapshot of it.
    pub async fn start_new_round(&self) -> Result<Round, AppError> {
        if self.acquiring.swap(true, Ordering::SeqCst) {
            return Err(AppError::AcquisitionInProgress);
        }
        let _in_flight = InFlight(&self.acquiring);

        let acquisition = self.inner.lock().await.prepare_acquisition();
        let scene = acquisition.run().await?;

        let mut controller = self.inner.lock().await;
        Ok(controller.install_round(scene).clone())
    }

    pub async fn reveal_hint(&self, kind: HintKind) -> Result<Option<String>, AppError> {
        let mut controller = self.inner.lock().await;
        if self.is_loading() {
            return Err(AppError::AcquisitionInProgress);
        }
        Ok(controller.reveal_hint(kind))
    }

    pub async fn submit_guess(
        &self,
        text: &str,
        guessed_season: Option<u32>,
        guessed_episode_number: Option<u32>,
    ) -> Result<Option<GuessResult>, AppError> {
        let mut controller = self.inner.lock().await;
        if self.is_loading() {
            return Err(AppError::AcquisitionInProgress);
        }
        Ok(controller.submit_guess(text, guessed_season, guessed_episode_number))
    }

    pub async fn set_season_range(&self, min: u32, max: u32) -> SeasonRange {
        self.inner.lock().await.set_season_range(min, max)
    }

    pub async fn round(&self) -> Option<Round> {
        self.inner.lock().await.round().cloned()
    }

    pub async fn session(&self) -> SessionState {
        self.inner.lock().await.session()
    }
}

use tower::{BoxError, Service, ServiceExt};
use tracing::{debug, info, warn};

use super::source::into_acquisition_error;
use super::types::Scene;
use super::validator::SceneValidator;
use crate::error::AcquisitionError;

pub const DEFAULT_MAX_ATTEMPTS: u32 = 50;

/// Fetches candidates until one passes `validator`, giving up after `max_attempts` fetches.
///
/// A fetch error ends acquisition immediately with `FetchFailed`; only rejected
/// candidates consume the attempt budget.
pub async fn acquire_valid_scene<S>(
    fetch: &mut S,
    validator: &SceneValidator,
    max_attempts: u32,
) -> Result<Scene, AcquisitionError>
where
    S: Service<(), Response = Scene, Error = BoxError>,
{
    for attempt in 1..=max_attempts {
        let scene = fetch
            .ready()
            .await
            .map_err(into_acquisition_error)?
            .call(())
            .await
            .map_err(into_acquisition_error)?;

        if validator.accepts(&scene) {
            info!("Accepted scene {} on attempt {}", scene.episode_key, attempt);
            return Ok(scene);
        }

        debug!(
            "Rejected scene {} (season {}) on attempt {}",
            scene.episode_key, scene.season, attempt
        );
    }

    warn!("No acceptable scene after {} attempts", max_attempts);
    Err(AcquisitionError::NoValidSceneFound {
        attempts: max_attempts,
    })
}

use std::collections::BTreeSet;
use std::path::Path;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use futures::Future;
use futures::task::{Context, Poll};
use rand::seq::IndexedRandom;
use tower::timeout::TimeoutLayer;
use tower::util::BoxCloneService;
use tower::{BoxError, Service, ServiceBuilder};
use tracing::{debug, info};

use super::provider::{ProviderScene, parse_scene};
use super::types::Scene;
use crate::error::{AcquisitionError, AppError};

/// Supplier of candidate scenes. Every call yields one independent candidate.
#[async_trait]
pub trait SceneSource: Send + Sync {
    async fn fetch_random_scene(&self) -> Result<Scene, AcquisitionError>;
}

/// Serves recorded provider payloads, picking one at random per fetch.
pub struct ReplaySource {
    payloads: Vec<serde_json::Value>,
}

impl ReplaySource {
    pub fn new(payloads: Vec<serde_json::Value>) -> Self {
        Self { payloads }
    }

    /// Reads a JSON array of provider payloads.
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref();
        let contents = tokio::fs::read_to_string(path).await?;
        let payloads: Vec<serde_json::Value> = serde_json::from_str(&contents)?;
        info!("Loaded {} recorded scenes from {}", payloads.len(), path.display());
        Ok(Self::new(payloads))
    }

    pub fn len(&self) -> usize {
        self.payloads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.payloads.is_empty()
    }

    /// Distinct episode titles in the recording, sorted.
    pub fn titles(&self) -> Vec<String> {
        self.payloads
            .iter()
            .filter_map(|payload| serde_json::from_value::<ProviderScene>(payload.clone()).ok())
            .map(|raw| raw.episode.title)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

#[async_trait]
impl SceneSource for ReplaySource {
    async fn fetch_random_scene(&self) -> Result<Scene, AcquisitionError> {
        let payload = self
            .payloads
            .choose(&mut rand::rng())
            .ok_or_else(|| AcquisitionError::FetchFailed("no recorded scenes".to_string()))?;
        parse_scene(&payload.to_string())
    }
}

/// `tower` adapter so fetches can be wrapped in layers such as a timeout.
#[derive(Clone)]
pub struct FetchService {
    inner: Arc<dyn SceneSource>,
}

impl FetchService {
    pub fn new(inner: Arc<dyn SceneSource>) -> Self {
        Self { inner }
    }

    /// Boxed, cloneable fetch service, with a per-fetch timeout when one is configured.
    pub fn boxed(
        inner: Arc<dyn SceneSource>,
        timeout: Option<Duration>,
    ) -> BoxCloneService<(), Scene, BoxError> {
        let service = ServiceBuilder::new()
            .option_layer(timeout.map(TimeoutLayer::new))
            .service(FetchService::new(inner));
        BoxCloneService::new(service)
    }
}

impl Service<()> for FetchService {
    type Response = Scene;
    type Error = BoxError;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, _req: ()) -> Self::Future {
        let inner = self.inner.clone();

        Box::pin(async move {
            match inner.fetch_random_scene().await {
                Ok(scene) => {
                    debug!("Fetched candidate scene {}", scene.episode_key);
                    Ok(scene)
                }
                Err(e) => Err(Box::new(e) as BoxError),
            }
        })
    }
}

/// Folds a boxed service error back into the acquisition taxonomy.
pub fn into_acquisition_error(error: BoxError) -> AcquisitionError {
    match error.downcast::<AcquisitionError>() {
        Ok(error) => *error,
        Err(error) if error.is::<tower::timeout::error::Elapsed>() => {
            AcquisitionError::FetchFailed("request timed out".to_string())
        }
        Err(error) => AcquisitionError::FetchFailed(error.to_string()),
    }
}

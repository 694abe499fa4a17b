pub mod acquisition;
pub mod provider;
pub mod source;
pub mod types;
pub mod validator;

pub use acquisition::{DEFAULT_MAX_ATTEMPTS, acquire_valid_scene};
pub use source::{FetchService, ReplaySource, SceneSource};
pub use types::{Scene, SeasonRange};
pub use validator::{SceneValidator, is_acceptable};

pub mod app;
pub mod config;
pub mod error;
pub mod game;
pub mod matching;
pub mod scene;

pub use crate::config::Settings;
pub use crate::error::{AcquisitionError, AppError};

pub use crate::game::{GameController, GuessResult, HintKind, Round, SessionState, SharedGame};
pub use crate::scene::{Scene, SceneSource, SeasonRange};

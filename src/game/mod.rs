pub mod controller;
pub mod evaluator;
pub mod hint;
pub mod round;
pub mod session;

pub use controller::{GameController, SharedGame};
pub use evaluator::{GuessResult, ScoringRules, evaluate};
pub use hint::{HintCosts, HintKind};
pub use round::Round;
pub use session::SessionState;

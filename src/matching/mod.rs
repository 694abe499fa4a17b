pub mod normalize;
pub mod similarity;

pub use normalize::normalize;
pub use similarity::{levenshtein_distance, similarity, suggest_titles};

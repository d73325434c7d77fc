pub mod model;
pub mod providers;
pub mod recommendations;
pub mod scoring;
pub mod stylemate;
pub mod weather;

pub use model::StyleModel;
pub use providers::{HttpModelBackend, ModelBackend};
pub use scoring::ScoringWeights;

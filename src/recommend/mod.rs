//! Recommendation engine
//!
//! Turns the merged configuration, the conflict report, and the set of
//! scopes in use into prioritized, impact/effort-tagged improvement
//! suggestions.

mod generate;
mod types;

pub use generate::generate_recommendations;
pub use types::{Level, Recommendation, RecommendationReport};

//! Scope model and precedence engine
//!
//! Four fixed scope levels ordered by precedence:
//! Task > Project > User > System. All precedence comparisons in the
//! resolver and diagnostics go through this module.

mod config;
mod level;

pub use config::ScopeConfig;
pub use level::{
    at_or_above, highest_precedence, precedence_cmp, sort_ascending, sort_descending, ScopeLevel,
    SCOPE_LEVELS,
};

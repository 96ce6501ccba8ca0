//! Profile matching: rule tables and per-node predicates.

pub mod eligibility;
pub mod freeform;
pub mod predicates;
pub mod preference;
pub mod programs;
pub mod spotlight;

pub use eligibility::EligibilityTable;
pub use freeform::{match_freeform, FreeformMatch};
pub use predicates::ProfileMatcher;
pub use programs::{jobs_for, match_programs};
pub use spotlight::{recent_grads, spotlight_topics};

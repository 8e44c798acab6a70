pub mod catalog;
pub mod clock;
pub mod config;
pub mod error;
pub mod logging;
pub mod planner;
pub mod ratings;

pub use catalog::{TopicCatalog, TopicMeta};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::PlannerConfig;
pub use error::PlanError;
pub use planner::{generate_plan, DayDetail, StudyPlan, StudyPlanGenerator, TopicDetail};
pub use ratings::UserRatings;

// Tests that need crate-internal access
#[cfg(test)]
#[path = "../tests/error_handling_test.rs"]
mod error_handling_test;

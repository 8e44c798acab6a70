pub mod planner;

pub use planner::{get_planner_config, PlannerConfig, DAYS_IN_PLAN};

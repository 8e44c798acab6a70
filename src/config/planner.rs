use crate::error::PlanError;
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Number of day slots in a plan.
pub const DAYS_IN_PLAN: usize = 7;

/// Hours available per day, front-loaded and tapering to a light last day.
pub const DEFAULT_DAY_CAPACITIES: [u32; DAYS_IN_PLAN] = [3, 3, 4, 4, 4, 3, 2];

/// Skill at or below which a learner gets the beginner problem set.
pub const BEGINNER_MAX_SKILL: i32 = 2;
/// Skill at or below which (and above beginner) a learner gets the intermediate set.
pub const INTERMEDIATE_MAX_SKILL: i32 = 3;
pub const BEGINNER_PROBLEM_COUNT: usize = 3;
pub const INTERMEDIATE_PROBLEM_COUNT: usize = 4;

/// Longest study time a catalog topic may declare.
pub const MAX_TOPIC_HOURS: u32 = 24;

/// Topics rated at or below this skill are listed as a day's focus areas.
pub const FOCUS_MAX_SKILL: i32 = 2;

// Priority formula
pub const MAX_SKILL_BASE: i32 = 6;
pub const DIFFICULTY_WEIGHT: f64 = 0.5;
pub const TIME_NORMALIZER: f64 = 10.0;
pub const PREREQ_READY_SKILL: i32 = 3;
pub const WEAK_PREREQ_PENALTY_PER_LEVEL: f64 = 0.5;
pub const UNRATED_PREREQ_PENALTY: f64 = 2.0;

/// Environment variable pointing at a planner TOML file.
pub const CONFIG_ENV_VAR: &str = "DSA_PLANNER_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannerConfig {
    #[serde(default = "default_day_capacities")]
    pub day_capacities: [u32; DAYS_IN_PLAN],
    #[serde(default = "default_beginner_max_skill")]
    pub beginner_max_skill: i32,
    #[serde(default = "default_intermediate_max_skill")]
    pub intermediate_max_skill: i32,
    #[serde(default = "default_beginner_problem_count")]
    pub beginner_problem_count: usize,
    #[serde(default = "default_intermediate_problem_count")]
    pub intermediate_problem_count: usize,
    #[serde(default = "default_focus_max_skill")]
    pub focus_max_skill: i32,
}

fn default_day_capacities() -> [u32; DAYS_IN_PLAN] {
    DEFAULT_DAY_CAPACITIES
}

fn default_beginner_max_skill() -> i32 {
    BEGINNER_MAX_SKILL
}

fn default_intermediate_max_skill() -> i32 {
    INTERMEDIATE_MAX_SKILL
}

fn default_beginner_problem_count() -> usize {
    BEGINNER_PROBLEM_COUNT
}

fn default_intermediate_problem_count() -> usize {
    INTERMEDIATE_PROBLEM_COUNT
}

fn default_focus_max_skill() -> i32 {
    FOCUS_MAX_SKILL
}

impl Default for PlannerConfig {
    fn default() -> Self {
        PlannerConfig {
            day_capacities: DEFAULT_DAY_CAPACITIES,
            beginner_max_skill: BEGINNER_MAX_SKILL,
            intermediate_max_skill: INTERMEDIATE_MAX_SKILL,
            beginner_problem_count: BEGINNER_PROBLEM_COUNT,
            intermediate_problem_count: INTERMEDIATE_PROBLEM_COUNT,
            focus_max_skill: FOCUS_MAX_SKILL,
        }
    }
}

impl PlannerConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, PlanError> {
        Ok(toml::from_str(content)?)
    }

    /// Load a planner config from a TOML file. Missing keys take their defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, PlanError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| PlanError::io(path, e))?;
        let config = Self::from_toml_str(&content)?;
        tracing::info!(path = ?path, "Loaded planner config");
        Ok(config)
    }

    /// Total weekly hours across all day slots.
    pub fn weekly_capacity(&self) -> u32 {
        self.day_capacities
            .iter()
            .fold(0u32, |total, &hours| total.saturating_add(hours))
    }
}

fn load_planner_config_internal() -> PlannerConfig {
    let path = match std::env::var_os(CONFIG_ENV_VAR) {
        Some(p) => PathBuf::from(p),
        None => {
            tracing::debug!("No planner config set, using defaults");
            return PlannerConfig::default();
        }
    };

    match PlannerConfig::load(&path) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(
                path = ?path,
                error = %e,
                "Failed to load planner config, using defaults"
            );
            PlannerConfig::default()
        }
    }
}

lazy_static! {
    static ref PLANNER_CONFIG: PlannerConfig = load_planner_config_internal();
}

/// Get the cached planner configuration (loaded once per process)
pub fn get_planner_config() -> &'static PlannerConfig {
    &PLANNER_CONFIG
}

pub mod allocator;
pub mod detail;
pub mod priority;

use crate::catalog::TopicCatalog;
use crate::clock::{Clock, SystemClock};
use crate::config::PlannerConfig;
use crate::error::PlanError;
use crate::ratings::UserRatings;

pub use allocator::{distribute_topics, DailyPlan};
pub use detail::{DayDetail, StudyPlan, StudyResources, TopicDetail};
pub use priority::{calculate_priorities, PrioritizedTopic};

/// Turns `{topic -> skill_level}` into a 7-day plan.
///
/// Pipeline: priorities -> day allocation -> detailed plan. The catalog is
/// borrowed, every intermediate structure is built fresh per call, and the
/// clock is read exactly once.
pub struct StudyPlanGenerator<'a, C: Clock = SystemClock> {
    catalog: &'a TopicCatalog,
    config: PlannerConfig,
    clock: C,
}

impl<'a> StudyPlanGenerator<'a, SystemClock> {
    pub fn new(catalog: &'a TopicCatalog) -> Self {
        StudyPlanGenerator {
            catalog,
            config: PlannerConfig::default(),
            clock: SystemClock,
        }
    }
}

impl Default for StudyPlanGenerator<'static, SystemClock> {
    fn default() -> Self {
        StudyPlanGenerator::new(TopicCatalog::builtin())
            .with_config(crate::config::get_planner_config().clone())
    }
}

impl<'a, C: Clock> StudyPlanGenerator<'a, C> {
    pub fn with_config(mut self, config: PlannerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_clock<D: Clock>(self, clock: D) -> StudyPlanGenerator<'a, D> {
        StudyPlanGenerator {
            catalog: self.catalog,
            config: self.config,
            clock,
        }
    }

    pub fn catalog(&self) -> &TopicCatalog {
        self.catalog
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Generate a plan, or `NoRatableTopics` when no rated topic is in the catalog.
    pub fn generate_plan(&self, ratings: &UserRatings) -> Result<StudyPlan, PlanError> {
        tracing::info!(
            ratings = ratings.len(),
            weekly_capacity = self.config.weekly_capacity(),
            "Generating study plan"
        );

        let priorities = calculate_priorities(self.catalog, ratings);
        if priorities.is_empty() {
            let err = PlanError::NoRatableTopics {
                rated: ratings.len(),
            };
            tracing::warn!(stage = err.stage(), error = %err, "Study plan rejected");
            return Err(err);
        }

        let daily_plan = distribute_topics(priorities, &self.config.day_capacities);
        let generated_at = self.clock.now();
        let plan = detail::create_detailed_plan(
            self.catalog,
            &daily_plan,
            ratings.len(),
            generated_at,
            &self.config,
        );

        tracing::info!(
            scheduled = plan.scheduled_topics(),
            total_hours = plan.total_hours(),
            "Study plan generated"
        );
        Ok(plan)
    }
}

/// Generate a plan with the built-in catalog, the process-wide planner config
/// and the system clock.
pub fn generate_plan(ratings: &UserRatings) -> Result<StudyPlan, PlanError> {
    StudyPlanGenerator::default().generate_plan(ratings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_default_generator_uses_builtin_catalog() {
        let generator = StudyPlanGenerator::default();
        assert_eq!(generator.catalog().len(), 20);
        assert_eq!(generator.config(), crate::config::get_planner_config());
    }

    #[test]
    fn test_clock_read_for_generated_at() {
        let instant = Utc.with_ymd_and_hms(2030, 6, 1, 23, 59, 0).unwrap();
        let ratings: UserRatings = [("Queues", 3)].into_iter().collect();
        let plan = StudyPlanGenerator::new(TopicCatalog::builtin())
            .with_clock(FixedClock(instant))
            .generate_plan(&ratings)
            .unwrap();
        assert_eq!(plan.generated_at, instant);
        assert_eq!(plan.day(1).unwrap().day_name, "Saturday");
        assert_eq!(plan.day(2).unwrap().date.to_string(), "2030-06-02");
    }

    #[test]
    fn test_free_function_matches_generator() {
        let ratings: UserRatings = [("Bit Manipulation", 2)].into_iter().collect();
        let plan = generate_plan(&ratings).unwrap();
        let expected = StudyPlanGenerator::default()
            .with_clock(FixedClock(plan.generated_at))
            .generate_plan(&ratings)
            .unwrap();
        assert_eq!(plan, expected);
        assert_eq!(plan.scheduled_topics(), 1);
        assert_eq!(plan.total_hours(), 2);
    }

    #[test]
    fn test_rejection_is_reported_as_such() {
        let ratings: UserRatings = [("Quantum Sorting", 1)].into_iter().collect();
        let err = generate_plan(&ratings).unwrap_err();
        assert!(err.is_rejection());
        assert!(!PlanError::InvalidCatalog("empty".into()).is_rejection());
    }
}

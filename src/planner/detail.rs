//! Expands an allocated week into the day-by-day plan handed to callers.

use crate::catalog::TopicCatalog;
use crate::config::PlannerConfig;
use crate::planner::allocator::DailyPlan;
use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const PLAN_DURATION: &str = "7 days";

const STUDY_APPROACHES: [&str; 5] = [
    "Start with basic concepts and simple examples. Focus on understanding fundamentals.",
    "Review theory briefly, then practice basic problems. Build confidence with easy exercises.",
    "Quick theory review, then focus on medium-difficulty problems. Work on pattern recognition.",
    "Minimal theory review. Focus on challenging problems and optimization techniques.",
    "Practice advanced problems and edge cases. Focus on interview-level questions.",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyResources {
    pub theory: String,
    pub practice: String,
    pub reference: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicDetail {
    pub name: String,
    pub current_skill_level: i32,
    pub estimated_time: u32,
    /// Rounded to two decimals
    pub priority_score: f64,
    pub recommended_problems: Vec<String>,
    pub study_approach: String,
    pub resources: StudyResources,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayDetail {
    pub date: NaiveDate,
    pub day_name: String,
    pub topics: Vec<TopicDetail>,
    pub total_time: u32,
    /// Topics rated at or below the focus threshold, in day order
    pub focus_areas: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyPlan {
    pub generated_at: DateTime<Utc>,
    /// Number of entries in the input ratings, including topics not in the catalog
    pub total_topics: usize,
    pub plan_duration: String,
    /// `day_1` .. `day_7`
    pub daily_schedule: BTreeMap<String, DayDetail>,
}

impl StudyPlan {
    pub fn day(&self, day_number: usize) -> Option<&DayDetail> {
        self.daily_schedule.get(&day_key(day_number))
    }

    /// Number of topics placed somewhere in the week.
    pub fn scheduled_topics(&self) -> usize {
        self.daily_schedule.values().map(|d| d.topics.len()).sum()
    }

    pub fn total_hours(&self) -> u32 {
        self.daily_schedule
            .values()
            .fold(0u32, |total, d| total.saturating_add(d.total_time))
    }
}

pub fn day_key(day_number: usize) -> String {
    format!("day_{}", day_number)
}

/// Practice problems by skill tier: beginners get the first few, intermediates
/// a few more, advanced learners the whole list.
pub fn select_problems(
    catalog: &TopicCatalog,
    topic: &str,
    skill_level: i32,
    config: &PlannerConfig,
) -> Vec<String> {
    let Some(problems) = catalog.problems(topic) else {
        return Vec::new();
    };

    let count = if skill_level <= config.beginner_max_skill {
        config.beginner_problem_count
    } else if skill_level <= config.intermediate_max_skill {
        config.intermediate_problem_count
    } else {
        problems.len()
    };

    problems.iter().take(count).cloned().collect()
}

/// Study approach text for a skill level. Anything outside 1-5 gets the level 3 text.
pub fn study_approach(skill_level: i32) -> &'static str {
    match skill_level {
        1..=5 => STUDY_APPROACHES[(skill_level - 1) as usize],
        _ => STUDY_APPROACHES[2],
    }
}

pub fn study_resources(topic: &str) -> StudyResources {
    StudyResources {
        theory: format!("Review {} concepts and time complexity", topic),
        practice: format!("LeetCode {} problems", topic),
        reference: format!("GeeksforGeeks {} articles", topic),
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn create_detailed_plan(
    catalog: &TopicCatalog,
    daily_plan: &DailyPlan,
    total_topics: usize,
    generated_at: DateTime<Utc>,
    config: &PlannerConfig,
) -> StudyPlan {
    let mut daily_schedule = BTreeMap::new();

    for (day_number, topics) in daily_plan.iter() {
        let date = generated_at + Duration::days(day_number as i64 - 1);

        let mut day = DayDetail {
            date: date.date_naive(),
            day_name: date.format("%A").to_string(),
            topics: Vec::with_capacity(topics.len()),
            total_time: 0,
            focus_areas: Vec::new(),
        };

        for info in topics {
            day.topics.push(TopicDetail {
                name: info.topic.clone(),
                current_skill_level: info.skill_level,
                estimated_time: info.estimated_hours,
                priority_score: round2(info.priority_score),
                recommended_problems: select_problems(
                    catalog,
                    &info.topic,
                    info.skill_level,
                    config,
                ),
                study_approach: study_approach(info.skill_level).to_string(),
                resources: study_resources(&info.topic),
            });
            day.total_time = day.total_time.saturating_add(info.estimated_hours);

            if info.skill_level <= config.focus_max_skill {
                day.focus_areas.push(info.topic.clone());
            }
        }

        daily_schedule.insert(day_key(day_number), day);
    }

    StudyPlan {
        generated_at,
        total_topics,
        plan_duration: PLAN_DURATION.to_string(),
        daily_schedule,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_problem_tiers() {
        let catalog = TopicCatalog::builtin();
        let config = PlannerConfig::default();
        assert_eq!(select_problems(catalog, "Arrays", 1, &config).len(), 3);
        assert_eq!(select_problems(catalog, "Arrays", 2, &config).len(), 3);
        assert_eq!(select_problems(catalog, "Arrays", 3, &config).len(), 4);
        assert_eq!(select_problems(catalog, "Arrays", 4, &config).len(), 5);
        assert_eq!(select_problems(catalog, "Arrays", 5, &config).len(), 5);
        // out of range still lands in a tier
        assert_eq!(select_problems(catalog, "Arrays", 0, &config).len(), 3);
        assert_eq!(select_problems(catalog, "Arrays", 9, &config).len(), 5);
    }

    #[test]
    fn test_problems_keep_catalog_order() {
        let config = PlannerConfig::default();
        let problems = select_problems(TopicCatalog::builtin(), "Arrays", 1, &config);
        assert_eq!(
            problems,
            vec!["Two Sum", "Best Time to Buy and Sell Stock", "Contains Duplicate"]
        );
    }

    #[test]
    fn test_unknown_topic_has_no_problems() {
        let config = PlannerConfig::default();
        let problems = select_problems(TopicCatalog::builtin(), "Nope", 1, &config);
        assert!(problems.is_empty());
    }

    #[test]
    fn test_study_approach_fallback() {
        assert!(study_approach(1).starts_with("Start with basic concepts"));
        assert!(study_approach(5).starts_with("Practice advanced problems"));
        assert_eq!(study_approach(0), study_approach(3));
        assert_eq!(study_approach(42), study_approach(3));
    }

    #[test]
    fn test_resources_mention_topic() {
        let resources = study_resources("Heaps");
        assert_eq!(resources.theory, "Review Heaps concepts and time complexity");
        assert_eq!(resources.practice, "LeetCode Heaps problems");
        assert_eq!(resources.reference, "GeeksforGeeks Heaps articles");
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(5.7), 5.7);
        assert_eq!(round2(1.234), 1.23);
        assert_eq!(round2(-1.3), -1.3);
    }

    #[test]
    fn test_day_totals_saturate() {
        use crate::planner::allocator::distribute_topics;
        use crate::planner::priority::PrioritizedTopic;
        use chrono::TimeZone;

        let vast = |name: &str| PrioritizedTopic {
            topic: name.to_string(),
            priority_score: 1.0,
            skill_level: 3,
            estimated_hours: u32::MAX,
        };
        let topics = (1..=8).map(|i| vast(&format!("vast{}", i))).collect();
        let config = PlannerConfig::default();
        let daily = distribute_topics(topics, &config.day_capacities);
        let generated_at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();

        let plan = create_detailed_plan(TopicCatalog::builtin(), &daily, 8, generated_at, &config);
        assert_eq!(plan.day(1).unwrap().topics.len(), 2);
        assert_eq!(plan.day(1).unwrap().total_time, u32::MAX);
        assert_eq!(plan.total_hours(), u32::MAX);
        assert_eq!(plan.scheduled_topics(), 8);
    }
}

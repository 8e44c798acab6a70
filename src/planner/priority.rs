//! Priority scoring: weaker skill and harder, longer topics come first, but a
//! topic whose prerequisites are weak or unrated is pushed back.
//!
//! ```text
//! score = (6 - skill) + difficulty * 0.5 + hours / 10 - prereq_penalty
//! ```

use crate::catalog::{TopicCatalog, TopicMeta};
use crate::config::planner::{
    DIFFICULTY_WEIGHT, MAX_SKILL_BASE, PREREQ_READY_SKILL, TIME_NORMALIZER,
    UNRATED_PREREQ_PENALTY, WEAK_PREREQ_PENALTY_PER_LEVEL,
};
use crate::ratings::UserRatings;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A rated catalog topic with its scheduling score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrioritizedTopic {
    pub topic: String,
    pub priority_score: f64,
    pub skill_level: i32,
    pub estimated_hours: u32,
}

/// Penalty for prerequisites the learner is not ready for.
///
/// A rated prerequisite below 3 costs 0.5 per missing level; an unrated one
/// (including one absent from the catalog) costs a flat 2.
pub fn prereq_penalty(meta: &TopicMeta, ratings: &UserRatings) -> f64 {
    meta.prerequisites
        .iter()
        .map(|prereq| match ratings.get(prereq) {
            Some(level) if level < PREREQ_READY_SKILL => {
                let missing = f64::from(PREREQ_READY_SKILL) - f64::from(level);
                missing * WEAK_PREREQ_PENALTY_PER_LEVEL
            }
            Some(_) => 0.0,
            None => UNRATED_PREREQ_PENALTY,
        })
        .sum()
}

pub fn priority_score(meta: &TopicMeta, skill_level: i32, ratings: &UserRatings) -> f64 {
    let base = f64::from(MAX_SKILL_BASE) - f64::from(skill_level);
    let difficulty_bonus = f64::from(meta.difficulty) * DIFFICULTY_WEIGHT;
    let time_factor = f64::from(meta.estimated_hours) / TIME_NORMALIZER;

    base + difficulty_bonus + time_factor - prereq_penalty(meta, ratings)
}

/// Score every rated topic found in the catalog, highest score first.
///
/// Unknown topics are skipped. Equal scores keep rating order.
pub fn calculate_priorities(
    catalog: &TopicCatalog,
    ratings: &UserRatings,
) -> Vec<PrioritizedTopic> {
    let mut priorities: Vec<PrioritizedTopic> = ratings
        .iter()
        .filter_map(|(topic, skill_level)| {
            let Some(meta) = catalog.lookup(topic) else {
                tracing::debug!(topic = %topic, "Skipping topic not in catalog");
                return None;
            };

            if !(1..=5).contains(&skill_level) {
                tracing::warn!(
                    topic = %topic,
                    skill_level = skill_level,
                    "Skill level outside 1-5, scoring it unchanged"
                );
            }

            Some(PrioritizedTopic {
                topic: topic.to_string(),
                priority_score: priority_score(meta, skill_level, ratings),
                skill_level,
                estimated_hours: meta.estimated_hours,
            })
        })
        .collect();

    // sort_by is stable, so ties stay in rating order
    priorities.sort_by(|a, b| {
        b.priority_score
            .partial_cmp(&a.priority_score)
            .unwrap_or(Ordering::Equal)
    });

    tracing::debug!(
        priorities = ?priorities
            .iter()
            .map(|p| (p.topic.as_str(), p.priority_score))
            .collect::<Vec<_>>(),
        "Topic priorities calculated"
    );

    priorities
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ratings(entries: &[(&str, i32)]) -> UserRatings {
        entries.iter().copied().collect()
    }

    #[test]
    fn test_penalty_for_weak_prerequisite() {
        let meta = TopicMeta::new("Stacks", 2, 2).with_prerequisites(["Arrays"]);
        assert_eq!(prereq_penalty(&meta, &ratings(&[("Arrays", 1)])), 1.0);
        assert_eq!(prereq_penalty(&meta, &ratings(&[("Arrays", 2)])), 0.5);
        assert_eq!(prereq_penalty(&meta, &ratings(&[("Arrays", 3)])), 0.0);
        assert_eq!(prereq_penalty(&meta, &ratings(&[])), 2.0);
    }

    #[test]
    fn test_penalties_add_up() {
        let meta = TopicMeta::new("Trie", 3, 3).with_prerequisites(["Strings", "Binary Trees"]);
        // Strings weak (1.0), Binary Trees unrated (2.0)
        assert_eq!(prereq_penalty(&meta, &ratings(&[("Strings", 1)])), 3.0);
    }

    #[test]
    fn test_prerequisite_outside_catalog_counts_as_unrated() {
        let meta = TopicMeta::new("Exotic", 1, 1).with_prerequisites(["Not A Topic"]);
        assert_eq!(prereq_penalty(&meta, &ratings(&[("Exotic", 3)])), 2.0);
    }

    #[test]
    fn test_unknown_topics_are_skipped() {
        let priorities = calculate_priorities(
            TopicCatalog::builtin(),
            &ratings(&[("Quantum Sorting", 1), ("Arrays", 1)]),
        );
        assert_eq!(priorities.len(), 1);
        assert_eq!(priorities[0].topic, "Arrays");
    }

    #[test]
    fn test_sorted_descending() {
        let priorities = calculate_priorities(
            TopicCatalog::builtin(),
            &ratings(&[("Arrays", 5), ("Strings", 1), ("Linked Lists", 3)]),
        );
        let scores: Vec<f64> = priorities.iter().map(|p| p.priority_score).collect();
        assert!(scores.windows(2).all(|w| w[0] >= w[1]));
        assert_eq!(priorities[0].topic, "Strings");
    }

    #[test]
    fn test_ties_keep_rating_order() {
        // Arrays and Strings share hours, difficulty and prerequisites
        let priorities = calculate_priorities(
            TopicCatalog::builtin(),
            &ratings(&[("Strings", 2), ("Arrays", 2)]),
        );
        assert_eq!(priorities[0].priority_score, priorities[1].priority_score);
        assert_eq!(priorities[0].topic, "Strings");
        assert_eq!(priorities[1].topic, "Arrays");
    }

    #[test]
    fn test_out_of_range_skill_propagates() {
        let priorities =
            calculate_priorities(TopicCatalog::builtin(), &ratings(&[("Arrays", 8)]));
        // (6 - 8) + 0.5 + 0.2
        assert!((priorities[0].priority_score - (-1.3)).abs() < 1e-9);
        assert_eq!(priorities[0].skill_level, 8);
    }

    #[test]
    fn test_extreme_skill_levels_do_not_overflow() {
        let catalog = TopicCatalog::builtin();
        let lowest = UserRatings::from_json_str(r#"{"Arrays": -2147483648}"#).unwrap();
        let priorities = calculate_priorities(catalog, &lowest);
        // 6 + 2147483648 + 0.5 + 0.2
        assert!((priorities[0].priority_score - 2_147_483_654.7).abs() < 1e-3);

        let highest: UserRatings = [("Arrays", i32::MAX)].into_iter().collect();
        let score = calculate_priorities(catalog, &highest)[0].priority_score;
        assert!(score < 0.0 && score.is_finite());
    }

    #[test]
    fn test_extreme_prerequisite_rating_does_not_overflow() {
        let input =
            UserRatings::from_json_str(r#"{"Stacks": 3, "Arrays": -2147483647}"#).unwrap();
        let meta = TopicCatalog::builtin().lookup("Stacks").unwrap();
        // (3 + 2147483647) * 0.5
        assert_eq!(prereq_penalty(meta, &input), 1_073_741_825.0);

        let priorities = calculate_priorities(TopicCatalog::builtin(), &input);
        let stacks = priorities.iter().find(|p| p.topic == "Stacks").unwrap();
        assert!(stacks.priority_score.is_finite());
    }
}

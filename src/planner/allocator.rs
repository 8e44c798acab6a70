//! Greedy first-fit packing of prioritized topics into the day slots.
//!
//! Topics are taken in priority order (not size order) and go to the first
//! day with room. When no day has room the topic goes to the least-loaded
//! day, lowest index on ties, so nothing is ever dropped.

use crate::config::planner::DAYS_IN_PLAN;
use crate::planner::priority::PrioritizedTopic;

/// Topics assigned to each day slot, with the hours used per day.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DailyPlan {
    days: [Vec<PrioritizedTopic>; DAYS_IN_PLAN],
    used_hours: [u32; DAYS_IN_PLAN],
}

impl DailyPlan {
    /// Topics for a zero-based day index, in assignment order.
    pub fn day(&self, index: usize) -> &[PrioritizedTopic] {
        self.days.get(index).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn used_hours(&self) -> &[u32; DAYS_IN_PLAN] {
        &self.used_hours
    }

    /// `(day_number, topics)` pairs, day numbers starting at 1.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[PrioritizedTopic])> + '_ {
        self.days
            .iter()
            .enumerate()
            .map(|(i, topics)| (i + 1, topics.as_slice()))
    }

    pub fn topic_count(&self) -> usize {
        self.days.iter().map(Vec::len).sum()
    }

    fn assign(&mut self, index: usize, topic: PrioritizedTopic) {
        self.used_hours[index] = self.used_hours[index].saturating_add(topic.estimated_hours);
        self.days[index].push(topic);
    }
}

/// First day (by index) whose remaining capacity fits `hours`.
fn first_fit(
    used: &[u32; DAYS_IN_PLAN],
    capacities: &[u32; DAYS_IN_PLAN],
    hours: u32,
) -> Option<usize> {
    (0..DAYS_IN_PLAN).find(|&day| {
        used[day]
            .checked_add(hours)
            .is_some_and(|total| total <= capacities[day])
    })
}

/// Day with the least hours used; the earliest such day on ties.
fn least_loaded(used: &[u32; DAYS_IN_PLAN]) -> usize {
    used.iter()
        .enumerate()
        .min_by_key(|&(_, hours)| *hours)
        .map(|(day, _)| day)
        .unwrap_or(0)
}

pub fn distribute_topics(
    priorities: Vec<PrioritizedTopic>,
    capacities: &[u32; DAYS_IN_PLAN],
) -> DailyPlan {
    let mut plan = DailyPlan::default();

    for topic in priorities {
        let day = match first_fit(&plan.used_hours, capacities, topic.estimated_hours) {
            Some(day) => day,
            None => {
                let day = least_loaded(&plan.used_hours);
                tracing::debug!(
                    topic = %topic.topic,
                    hours = topic.estimated_hours,
                    day = day + 1,
                    "No day has room, overflowing to least-loaded day"
                );
                day
            }
        };
        plan.assign(day, topic);
    }

    plan
}

use crate::error::PlanError;
use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::path::Path;

/// Self-assessed skill per topic, nominally 1 (novice) to 5 (expert).
///
/// Keeps insertion order: priority ties are broken by it, so two calls with
/// the same entries in the same order produce the same plan. Values outside
/// 1-5 are accepted as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserRatings {
    entries: Vec<(String, i32)>,
}

impl UserRatings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a topic's skill level. An existing topic keeps its position.
    pub fn insert<S: Into<String>>(&mut self, topic: S, skill_level: i32) {
        let topic = topic.into();
        match self.entries.iter_mut().find(|(name, _)| *name == topic) {
            Some(entry) => entry.1 = skill_level,
            None => self.entries.push((topic, skill_level)),
        }
    }

    pub fn get(&self, topic: &str) -> Option<i32> {
        self.entries
            .iter()
            .find(|(name, _)| name == topic)
            .map(|(_, level)| *level)
    }

    pub fn contains(&self, topic: &str) -> bool {
        self.get(topic).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i32)> + '_ {
        self.entries.iter().map(|(name, level)| (name.as_str(), *level))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parse `{"Arrays": 1, ...}` or the wrapped form `{"ratings": {"Arrays": 1, ...}}`,
    /// keeping document order.
    pub fn from_json_str(content: &str) -> Result<Self, PlanError> {
        let document: RatingsDocument = serde_json::from_str(content)?;
        Ok(match document {
            RatingsDocument::Wrapped { ratings } => ratings,
            RatingsDocument::Flat(ratings) => ratings,
        })
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, PlanError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| PlanError::io(path, e))?;
        let ratings = Self::from_json_str(&content)?;
        tracing::debug!(path = ?path, count = ratings.len(), "Loaded ratings");
        Ok(ratings)
    }
}

impl<S: Into<String>> FromIterator<(S, i32)> for UserRatings {
    fn from_iter<I: IntoIterator<Item = (S, i32)>>(iter: I) -> Self {
        let mut ratings = UserRatings::new();
        for (topic, level) in iter {
            ratings.insert(topic, level);
        }
        ratings
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RatingsDocument {
    Wrapped { ratings: UserRatings },
    Flat(UserRatings),
}

impl Serialize for UserRatings {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (topic, level) in &self.entries {
            map.serialize_entry(topic, level)?;
        }
        map.end()
    }
}

// Reads the map entry by entry so document order survives; serde_json's own
// Map would sort the keys.
impl<'de> Deserialize<'de> for UserRatings {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RatingsVisitor;

        impl<'de> Visitor<'de> for RatingsVisitor {
            type Value = UserRatings;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of topic names to integer skill levels")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut ratings = UserRatings::new();
                while let Some((topic, level)) = access.next_entry::<String, i64>()? {
                    let level = i32::try_from(level).map_err(|_| {
                        <A::Error as de::Error>::custom(format!(
                            "skill level {} for '{}' is out of range",
                            level, topic
                        ))
                    })?;
                    ratings.insert(topic, level);
                }
                Ok(ratings)
            }
        }

        deserializer.deserialize_map(RatingsVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_keeps_first_position() {
        let mut ratings = UserRatings::new();
        ratings.insert("Graphs", 2);
        ratings.insert("Arrays", 4);
        ratings.insert("Graphs", 5);

        let entries: Vec<_> = ratings.iter().collect();
        assert_eq!(entries, vec![("Graphs", 5), ("Arrays", 4)]);
        assert_eq!(ratings.len(), 2);
    }

    #[test]
    fn test_json_keeps_document_order() {
        let ratings =
            UserRatings::from_json_str(r#"{"Trie": 3, "Arrays": 1, "Heaps": 2}"#).unwrap();
        let topics: Vec<_> = ratings.iter().map(|(t, _)| t).collect();
        assert_eq!(topics, vec!["Trie", "Arrays", "Heaps"]);
    }

    #[test]
    fn test_wrapped_request_body() {
        let ratings =
            UserRatings::from_json_str(r#"{"ratings": {"Stacks": 2, "Queues": 5}}"#).unwrap();
        assert_eq!(ratings.get("Stacks"), Some(2));
        assert_eq!(ratings.get("Queues"), Some(5));
        assert!(!ratings.contains("ratings"));
    }

    #[test]
    fn test_out_of_range_levels_are_kept() {
        let ratings = UserRatings::from_json_str(r#"{"Arrays": 9, "Strings": -1}"#).unwrap();
        assert_eq!(ratings.get("Arrays"), Some(9));
        assert_eq!(ratings.get("Strings"), Some(-1));
    }

    #[test]
    fn test_non_integer_level_is_an_error() {
        let result = UserRatings::from_json_str(r#"{"Arrays": "high"}"#);
        assert!(matches!(result, Err(PlanError::Json(_))));
    }

    #[test]
    fn test_serialize_preserves_order() {
        let ratings: UserRatings = vec![("Strings", 3), ("Arrays", 1)].into_iter().collect();
        let json = serde_json::to_string(&ratings).unwrap();
        assert_eq!(json, r#"{"Strings":3,"Arrays":1}"#);
    }
}

//! Static topic reference data: study time, difficulty, prerequisites and
//! practice problems per topic.

mod builtin;

use crate::config::planner::MAX_TOPIC_HOURS;
use crate::error::PlanError;
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicMeta {
    pub name: String,
    pub estimated_hours: u32,
    /// 1 (easy) to 5 (hard)
    pub difficulty: u32,
    /// May name topics that are not in the catalog; those count as unrated.
    #[serde(default)]
    pub prerequisites: Vec<String>,
}

impl TopicMeta {
    pub fn new<S: Into<String>>(name: S, estimated_hours: u32, difficulty: u32) -> Self {
        TopicMeta {
            name: name.into(),
            estimated_hours,
            difficulty,
            prerequisites: Vec::new(),
        }
    }

    pub fn with_prerequisites<I, S>(mut self, prerequisites: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.prerequisites = prerequisites.into_iter().map(Into::into).collect();
        self
    }
}

/// Read-only topic catalog. Built once and shared by reference.
#[derive(Debug, Clone, Default)]
pub struct TopicCatalog {
    order: Vec<String>,
    topics: HashMap<String, TopicMeta>,
    problems: HashMap<String, Vec<String>>,
}

/// One `[[topics]]` entry of a catalog TOML file.
#[derive(Debug, Deserialize)]
struct CatalogEntry {
    #[serde(flatten)]
    meta: TopicMeta,
    #[serde(default)]
    problems: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    topics: Vec<CatalogEntry>,
}

lazy_static! {
    static ref BUILTIN_CATALOG: TopicCatalog = builtin::dsa_catalog();
}

impl TopicCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in data structures and algorithms catalog.
    pub fn builtin() -> &'static TopicCatalog {
        &BUILTIN_CATALOG
    }

    /// Add a topic with its ordered practice problems (easiest first).
    /// Re-adding a name replaces the entry but keeps its original position.
    pub fn with_topic<I, S>(mut self, meta: TopicMeta, problems: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.insert(meta, problems.into_iter().map(Into::into).collect());
        self
    }

    fn insert(&mut self, meta: TopicMeta, problems: Vec<String>) {
        if !self.topics.contains_key(&meta.name) {
            self.order.push(meta.name.clone());
        }
        if problems.is_empty() {
            self.problems.remove(&meta.name);
        } else {
            self.problems.insert(meta.name.clone(), problems);
        }
        self.topics.insert(meta.name.clone(), meta);
    }

    pub fn lookup(&self, name: &str) -> Option<&TopicMeta> {
        self.topics.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.topics.contains_key(name)
    }

    /// Ordered practice problems for a topic, if it has any.
    pub fn problems(&self, name: &str) -> Option<&[String]> {
        self.problems.get(name).map(Vec::as_slice)
    }

    /// Topics in declaration order.
    pub fn topics(&self) -> impl Iterator<Item = &TopicMeta> + '_ {
        self.order.iter().filter_map(move |name| self.topics.get(name))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Parse a catalog from TOML (`[[topics]]` tables with an optional `problems` list).
    pub fn from_toml_str(content: &str) -> Result<Self, PlanError> {
        let file: CatalogFile = toml::from_str(content)?;
        let mut catalog = TopicCatalog::new();

        for entry in file.topics {
            let meta = entry.meta;
            if !(1..=MAX_TOPIC_HOURS).contains(&meta.estimated_hours) {
                return Err(PlanError::InvalidCatalog(format!(
                    "topic '{}' has {} estimated hours (expected 1-{})",
                    meta.name, meta.estimated_hours, MAX_TOPIC_HOURS
                )));
            }
            if !(1..=5).contains(&meta.difficulty) {
                return Err(PlanError::InvalidCatalog(format!(
                    "topic '{}' has difficulty {} (expected 1-5)",
                    meta.name, meta.difficulty
                )));
            }
            catalog.insert(meta, entry.problems);
        }

        Ok(catalog)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, PlanError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| PlanError::io(path, e))?;
        let catalog = Self::from_toml_str(&content)?;
        tracing::info!(path = ?path, topics = catalog.len(), "Loaded topic catalog");
        Ok(catalog)
    }
}

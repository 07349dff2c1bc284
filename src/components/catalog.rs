//! The episode catalog and the search filter over it.
//!
//! The catalog is decoded once from JSON bundled into the binary and never
//! changes afterwards. Everything the page shows is derived from it through
//! [`Catalog::filter`], which hands back catalog positions rather than copies.

use std::fmt;
use std::rc::Rc;

use anyhow::Context;
use chrono::NaiveDate;
use serde::Deserialize;

use crate::components::config::{CATALOG_DATE_FORMAT, EMBEDDED_CATALOG};

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct EpisodeRecord {
    pub date: String,
    pub topic: String,
    #[serde(rename = "file", alias = "mediaPath", alias = "media_path")]
    pub media_path: String,
}

impl EpisodeRecord {
    pub fn new(
        date: impl Into<String>,
        topic: impl Into<String>,
        media_path: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            topic: topic.into(),
            media_path: media_path.into(),
        }
    }

    /// `needle` must already be lower-cased; `trimmed` is the same query before lower-casing.
    fn matches(&self, needle: &str, trimmed: &str) -> bool {
        self.topic.to_lowercase().contains(needle) || self.date.contains(trimmed)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Catalog {
    episodes: Rc<Vec<EpisodeRecord>>,
}

impl Catalog {
    pub fn new(episodes: Vec<EpisodeRecord>) -> Self {
        Self {
            episodes: Rc::new(episodes),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, anyhow::Error> {
        let episodes: Vec<EpisodeRecord> = serde_json::from_str(json)
            .context("catalog data is not a list of episode records")?;
        Ok(Self::new(episodes))
    }

    /// Decodes the catalog shipped inside the binary. A broken bundle leaves
    /// the page with an empty catalog instead of failing to start.
    pub fn embedded() -> Self {
        match Self::from_json(EMBEDDED_CATALOG) {
            Ok(catalog) => {
                log::info!("Loaded {} episodes", catalog.len());
                catalog
            }
            Err(e) => {
                log::error!("Failed to decode the bundled catalog: {:#}", e);
                Self::default()
            }
        }
    }

    pub fn len(&self) -> usize {
        self.episodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.episodes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&EpisodeRecord> {
        self.episodes.get(index)
    }

    pub fn episodes(&self) -> &[EpisodeRecord] {
        &self.episodes
    }

    pub fn iter(&self) -> impl Iterator<Item = &EpisodeRecord> {
        self.episodes.iter()
    }

    /// Topic matches ignore case, date matches compare the trimmed query
    /// as typed. An empty query keeps every episode in catalog order.
    pub fn filter(&self, query: &str) -> FilteredView {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return FilteredView::all(self.len());
        }

        let needle = trimmed.to_lowercase();
        let indices = self
            .episodes
            .iter()
            .enumerate()
            .filter(|(_, episode)| episode.matches(&needle, trimmed))
            .map(|(index, _)| index)
            .collect();

        FilteredView { indices }
    }

    /// Reports entries that would display badly. Nothing is dropped or rewritten.
    pub fn audit(&self) -> Vec<AuditFinding> {
        let mut findings = Vec::new();
        for (index, episode) in self.episodes.iter().enumerate() {
            let mut report = |issue| findings.push(AuditFinding { index, issue });

            if episode.topic.trim().is_empty() {
                report(RecordIssue::EmptyTopic);
            }
            if episode.media_path.trim().is_empty() {
                report(RecordIssue::EmptyMediaPath);
            }
            if episode.date.trim().is_empty() {
                report(RecordIssue::EmptyDate);
            } else if NaiveDate::parse_from_str(&episode.date, CATALOG_DATE_FORMAT).is_err() {
                report(RecordIssue::UnparsableDate(episode.date.clone()));
            }
        }
        findings
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordIssue {
    EmptyDate,
    EmptyTopic,
    EmptyMediaPath,
    UnparsableDate(String),
}

impl fmt::Display for RecordIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordIssue::EmptyDate => write!(f, "date is empty"),
            RecordIssue::EmptyTopic => write!(f, "topic is empty"),
            RecordIssue::EmptyMediaPath => write!(f, "media path is empty"),
            RecordIssue::UnparsableDate(date) => {
                write!(f, "date {:?} is not in DD-MM-YYYY form", date)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditFinding {
    pub index: usize,
    pub issue: RecordIssue,
}

/// Catalog positions of the episodes that matched a query, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilteredView {
    indices: Vec<usize>,
}

impl FilteredView {
    pub fn all(len: usize) -> Self {
        Self {
            indices: (0..len).collect(),
        }
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }

    pub fn records<'a>(
        &'a self,
        catalog: &'a Catalog,
    ) -> impl Iterator<Item = (usize, &'a EpisodeRecord)> + 'a {
        self.indices
            .iter()
            .filter_map(move |&index| catalog.get(index).map(|episode| (index, episode)))
    }
}

// src/catalog/mod.rs

//! Read-only entity catalog.
//!
//! A [`Catalog`] is a snapshot of categories, mentors, students and projects
//! held in memory for the lifetime of the process. It is either the built-in
//! sample data or loaded once from a JSON file.

mod sample;

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::models::{Category, Mentor, Project, Student};

/// The built-in sample projects used as the feed fallback.
pub fn sample_projects() -> Vec<Project> {
    sample::projects()
}

/// Immutable collections of every searchable entity.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub mentors: Vec<Mentor>,
    #[serde(default)]
    pub students: Vec<Student>,
    #[serde(default)]
    pub projects: Vec<Project>,
}

impl Catalog {
    /// The compiled-in sample catalog.
    pub fn sample() -> Self {
        Self {
            categories: sample::categories(),
            mentors: sample::mentors(),
            students: sample::students(),
            projects: sample::projects(),
        }
    }

    /// Load a catalog snapshot from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Check that identifiers are unique within each collection.
    pub fn validate(&self) -> Result<()> {
        ensure_unique("categories", self.categories.iter().map(|c| c.id.as_str()))?;
        ensure_unique("mentors", self.mentors.iter().map(|m| m.id.as_str()))?;
        ensure_unique("students", self.students.iter().map(|s| s.id.as_str()))?;
        ensure_unique("projects", self.projects.iter().map(|p| p.id.as_str()))?;
        Ok(())
    }

    /// Find a category by its slug.
    pub fn category_by_slug(&self, slug: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.slug == slug)
    }

    /// Total number of records across all collections.
    pub fn len(&self) -> usize {
        self.categories.len() + self.mentors.len() + self.students.len() + self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn ensure_unique<'a>(collection: &str, ids: impl Iterator<Item = &'a str>) -> Result<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(AppError::validation(format!(
                "duplicate id '{id}' in {collection}"
            )));
        }
    }
    Ok(())
}

// src/search.rs

//! Case-insensitive substring search over the catalog.
//!
//! The query is lower-cased once and matched against each record's
//! searchable fields. List-valued fields match when any element does.
//! Results keep catalog order; there is no ranking.
//!
//! | Entity   | Fields                                              |
//! |----------|-----------------------------------------------------|
//! | Category | name                                                |
//! | Mentor   | name, field, position, research[], achievements[]   |
//! | Student  | name, course, skills[]                              |
//! | Project  | title, description, tags[]                          |

use serde::Serialize;

use crate::catalog::Catalog;
use crate::models::{Category, Mentor, Project, Student};

/// A record exposing the text fields a query is matched against.
pub trait Searchable {
    /// Every searchable string, list elements flattened in.
    fn search_fields(&self) -> Vec<&str>;

    /// True if any field contains `needle`. `needle` must already be lower-case.
    fn matches(&self, needle: &str) -> bool {
        self.search_fields()
            .into_iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

impl Searchable for Category {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str()]
    }
}

impl Searchable for Mentor {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![
            self.name.as_str(),
            self.field.as_str(),
            self.position.as_str(),
        ];
        fields.extend(self.research.iter().map(String::as_str));
        fields.extend(self.achievements.iter().map(String::as_str));
        fields
    }
}

impl Searchable for Student {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str(), self.course.as_str()];
        fields.extend(self.skills.iter().map(String::as_str));
        fields
    }
}

impl Searchable for Project {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str(), self.description.as_str()];
        fields.extend(self.tags.iter().map(String::as_str));
        fields
    }
}

/// Matches grouped by entity, in catalog order.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct SearchResults<'a> {
    pub categories: Vec<&'a Category>,
    pub mentors: Vec<&'a Mentor>,
    pub students: Vec<&'a Student>,
    pub projects: Vec<&'a Project>,
}

impl SearchResults<'_> {
    /// Number of matches across all groups.
    pub fn total(&self) -> usize {
        self.categories.len() + self.mentors.len() + self.students.len() + self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Search every collection of `catalog` for `query`.
///
/// An empty query returns `None`: nothing is searched and nothing should be
/// shown, which is not the same as matching everything.
pub fn search<'a>(query: &str, catalog: &'a Catalog) -> Option<SearchResults<'a>> {
    if query.is_empty() {
        return None;
    }
    let needle = query.to_lowercase();

    Some(SearchResults {
        categories: filter(&catalog.categories, &needle),
        mentors: filter(&catalog.mentors, &needle),
        students: filter(&catalog.students, &needle),
        projects: filter(&catalog.projects, &needle),
    })
}

fn filter<'a, T: Searchable>(items: &'a [T], needle: &str) -> Vec<&'a T> {
    items.iter().filter(|item| item.matches(needle)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names<'a>(items: impl IntoIterator<Item = &'a str>) -> Vec<&'a str> {
        items.into_iter().collect()
    }

    #[test]
    fn test_empty_query_yields_no_results() {
        let catalog = Catalog::sample();
        assert!(search("", &catalog).is_none());
    }

    #[test]
    fn test_whitespace_query_is_not_trimmed() {
        let catalog = Catalog::sample();
        let results = search(" ", &catalog).unwrap();
        // Multi-word names contain a space.
        assert!(!results.mentors.is_empty());
    }

    #[test]
    fn test_ai_matches_sarah_not_michael() {
        let catalog = Catalog::sample();
        let results = search("AI", &catalog).unwrap();
        let mentors = names(results.mentors.iter().map(|m| m.name.as_str()));
        assert!(mentors.contains(&"Dr. Sarah Johnson"));
        assert!(!mentors.contains(&"Prof. Michael Chen"));
    }

    #[test]
    fn test_python_matches_students_by_skill() {
        let catalog = Catalog::sample();
        let results = search("python", &catalog).unwrap();
        let students = names(results.students.iter().map(|s| s.name.as_str()));
        assert!(students.contains(&"Alex Kumar"));
        assert!(students.contains(&"Jessica Wang"));
        assert!(!students.contains(&"Ryan Patel"));
    }

    #[test]
    fn test_case_insensitive() {
        let catalog = Catalog::sample();
        assert_eq!(search("REACT", &catalog), search("react", &catalog));
        assert!(!search("REACT", &catalog).unwrap().is_empty());
    }

    #[test]
    fn test_every_match_contains_query() {
        let catalog = Catalog::sample();
        for query in ["data", "Vision", "pro", "e", "IoT"] {
            let needle = query.to_lowercase();
            let results = search(query, &catalog).unwrap();
            let contains = |fields: Vec<&str>| {
                fields.iter().any(|f| f.to_lowercase().contains(&needle))
            };
            assert!(results.categories.iter().all(|c| contains(c.search_fields())));
            assert!(results.mentors.iter().all(|m| contains(m.search_fields())));
            assert!(results.students.iter().all(|s| contains(s.search_fields())));
            assert!(results.projects.iter().all(|p| contains(p.search_fields())));
        }
    }

    #[test]
    fn test_results_keep_catalog_order() {
        let catalog = Catalog::sample();
        let results = search("dr.", &catalog).unwrap();
        let expected: Vec<&str> = catalog
            .mentors
            .iter()
            .filter(|m| m.name.starts_with("Dr."))
            .map(|m| m.name.as_str())
            .collect();
        let actual = names(results.mentors.iter().map(|m| m.name.as_str()));
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_category_matches_name_only() {
        let catalog = Catalog::sample();
        // "teal" is a color key, not a searchable field.
        let results = search("teal", &catalog).unwrap();
        assert!(results.categories.is_empty());
    }

    #[test]
    fn test_no_match() {
        let catalog = Catalog::sample();
        let results = search("quantum gastronomy", &catalog).unwrap();
        assert!(results.is_empty());
        assert_eq!(results.total(), 0);
    }

    #[test]
    fn test_project_tag_match() {
        let catalog = Catalog::sample();
        let results = search("opencv", &catalog).unwrap();
        assert_eq!(results.projects.len(), 1);
        assert_eq!(results.projects[0].title, "Smart Attendance System");
    }
}

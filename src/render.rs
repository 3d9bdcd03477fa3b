// src/render.rs

//! Plain-text rendering of feeds, search results and statistics.

use crate::feed::{Feed, FeedSource};
use crate::models::{Category, Mentor, Project, Stats, Student};
use crate::search::SearchResults;

/// Width of section separators.
const RULE_WIDTH: usize = 60;

/// Render a section header.
pub fn header(title: &str) -> String {
    let border = "═".repeat(RULE_WIDTH);
    format!("{border}\n  {title}\n{border}")
}

/// Render a titled list of key/value pairs.
pub fn summary(title: &str, items: &[(&str, String)]) -> String {
    let mut out = format!("[SUMMARY] {title}");
    for (key, value) in items {
        out.push_str(&format!("\n    {key}: {value}"));
    }
    out
}

/// Render tags as inline badges.
pub fn badges(tags: &[String]) -> String {
    tags.iter()
        .map(|t| format!("[{t}]"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render a project card.
pub fn project_card(project: &Project) -> String {
    let mut lines = vec![
        project.title.clone(),
        format!(
            "  by {} ({})",
            project.author.name,
            project.author.image_or_placeholder()
        ),
    ];
    if !project.description.is_empty() {
        lines.push(format!("  {}", project.description));
    }
    if !project.tags.is_empty() {
        lines.push(format!("  {}", badges(&project.tags)));
    }
    lines.push(format!("  cover: {}", project.cover_image()));
    for (label, url) in [("code", &project.github_url), ("live", &project.live_url)] {
        if !url.is_empty() {
            lines.push(format!("  {label}: {url}"));
        }
    }
    if let Some(video) = &project.video {
        lines.push(format!("  video: {video}"));
    }
    lines.join("\n")
}

fn category_line(category: &Category) -> String {
    format!("{} ({} projects)", category.name, category.project_count)
}

fn mentor_line(mentor: &Mentor) -> String {
    format!("{}, {} ({})", mentor.name, mentor.position, mentor.field)
}

fn student_line(student: &Student) -> String {
    format!(
        "{}, {} {}",
        student.name,
        student.course,
        badges(&student.skills)
    )
}

fn group<T>(out: &mut Vec<String>, title: &str, items: &[&T], line: impl Fn(&T) -> String) {
    if items.is_empty() {
        return;
    }
    out.push(format!("{title} ({})", items.len()));
    out.extend(items.iter().map(|item| format!("  - {}", line(*item))));
}

/// Render search results for `query`.
///
/// `None` (empty query) renders nothing. A search with no matches renders
/// the explicit "no results" message.
pub fn search_results(query: &str, results: Option<&SearchResults<'_>>) -> String {
    let Some(results) = results else {
        return String::new();
    };
    if results.is_empty() {
        return format!("No results found for \"{query}\"");
    }

    let mut out = Vec::new();
    group(&mut out, "Categories", &results.categories, category_line);
    group(&mut out, "Mentors", &results.mentors, mentor_line);
    group(&mut out, "Students", &results.students, student_line);
    group(&mut out, "Projects", &results.projects, |p: &Project| {
        format!("{} {}", p.title, badges(&p.tags))
    });
    out.join("\n")
}

/// Render user statistics.
pub fn stats(stats: &Stats) -> String {
    summary(
        "Your activity",
        &[
            ("Projects", stats.total.to_string()),
            ("This month", stats.month.to_string()),
            ("Active minutes", stats.active_min.to_string()),
            ("Average per day", format!("{:.2}", stats.avg_per_day)),
        ],
    )
}

/// Render a whole feed: cards, then statistics.
pub fn feed(feed: &Feed) -> String {
    let title = match feed.source {
        FeedSource::Remote => "Latest projects",
        FeedSource::Fallback => "Featured projects",
    };
    let mut sections = vec![header(title)];
    sections.extend(feed.projects.iter().map(project_card));
    sections.push(stats(&feed.stats));
    sections.join("\n\n")
}

//! Problem catalog and category/problem dispatch.

use std::io::Write;

use anyhow::{bail, Result};

use crate::demo;

/// A runnable problem demonstration.
#[derive(Debug)]
pub struct Problem {
    pub category: &'static str,
    pub name: &'static str,
    pub summary: &'static str,
    pub run: fn(&mut dyn Write) -> Result<()>,
}

/// Every problem the CLI can run.
pub const PROBLEMS: &[Problem] = &[Problem {
    category: "datastructures",
    name: "graph",
    summary: "Weighted graph: traversal, shortest path, cycles, connectivity",
    run: demo::run,
}];

/// Print categories and their problems.
pub fn list(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "Available problems:")?;
    let mut current = "";
    for problem in PROBLEMS {
        if problem.category != current {
            current = problem.category;
            writeln!(out, "\n{current}:")?;
        }
        writeln!(out, "  {:<12} {}", problem.name, problem.summary)?;
    }
    Ok(())
}

/// Find a problem by category and name.
pub fn find(category: &str, name: &str) -> Result<&'static Problem> {
    if !PROBLEMS.iter().any(|p| p.category == category) {
        bail!(
            "unknown category: {category} (available: {})",
            categories().join(", ")
        );
    }
    match PROBLEMS.iter().find(|p| p.category == category && p.name == name) {
        Some(problem) => Ok(problem),
        None => bail!(
            "unknown problem in {category}: {name} (available: {})",
            PROBLEMS
                .iter()
                .filter(|p| p.category == category)
                .map(|p| p.name)
                .collect::<Vec<_>>()
                .join(", ")
        ),
    }
}

/// Run a problem's demonstration.
pub fn run(category: &str, name: &str, out: &mut dyn Write) -> Result<()> {
    let problem = find(category, name)?;
    tracing::info!(category, problem = name, "running demonstration");
    (problem.run)(out)
}

fn categories() -> Vec<&'static str> {
    let mut categories: Vec<&'static str> = PROBLEMS.iter().map(|p| p.category).collect();
    categories.dedup();
    categories
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_shows_graph_problem() {
        let mut out = Vec::new();
        list(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("datastructures:"));
        assert!(text.contains("graph"));
    }

    #[test]
    fn unknown_category_names_the_choices() {
        let err = find("cooking", "graph").unwrap_err().to_string();
        assert_eq!(err, "unknown category: cooking (available: datastructures)");
    }

    #[test]
    fn unknown_problem_names_the_choices() {
        let err = find("datastructures", "trie").unwrap_err().to_string();
        assert_eq!(err, "unknown problem in datastructures: trie (available: graph)");
    }

    #[test]
    fn finds_graph_problem() {
        let problem = find("datastructures", "graph").unwrap();
        assert_eq!(problem.name, "graph");
        assert!(format!("{problem:?}").contains("datastructures"));
    }
}

use std::collections::BTreeSet;

use crate::profile::Project;

/// Sorted, de-duplicated union of every project's tech stack.
pub fn aggregate_skills(projects: &[Project]) -> Vec<String> {
    projects
        .iter()
        .flat_map(|project| project.tech_stack.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

//! Shows only the project entries matching the selected technology.

use folio_shared::markers::{ACTIVE_CLASS, ALL_FILTER, TECH_ATTR};

use crate::surface::PageSurface;

/// Whether an entry tagged `tags` stays visible under filter `label`.
///
/// Matching is a case-sensitive substring test against the raw tag string,
/// so `py` matches an entry tagged `go,python`.
pub fn matches(label: &str, tags: &str) -> bool {
    label == ALL_FILTER || tags.contains(label)
}

/// Activate `button`: make it the only active filter and apply its label.
///
/// Missing `data-tech` attributes read as the empty string. Returns the number
/// of entries left visible.
pub fn activate<S: PageSurface>(
    surface: &S,
    button: &S::Element,
    buttons: &[S::Element],
    items: &[S::Element],
) -> usize {
    for other in buttons {
        surface.set_class(other, ACTIVE_CLASS, false);
    }
    surface.set_class(button, ACTIVE_CLASS, true);

    let label = surface.attribute(button, TECH_ATTR).unwrap_or_default();
    let mut visible = 0;
    for item in items {
        let tags = surface.attribute(item, TECH_ATTR).unwrap_or_default();
        let shown = matches(&label, &tags);
        surface.set_visible(item, shown);
        visible += usize::from(shown);
    }

    tracing::debug!(label = %label, visible, total = items.len(), "project filter applied");
    visible
}

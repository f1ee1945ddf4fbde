//! Highlights the navigation link of the section currently being read.
//!
//! A section counts as reached once the scroll offset is within
//! [`scroll_lead_margin`](crate::BehaviorConfig::scroll_lead_margin) of its top
//! edge. The current section is the last reached one in document order.

use folio_shared::markers::{ACTIVE_CLASS, HREF_ATTR, ID_ATTR};

use crate::surface::PageSurface;

/// Pick the current section id from `(id, top)` pairs in document order.
///
/// Returns the empty string when no section has been reached yet.
pub fn current_section<I>(scroll_offset: f64, lead_margin: f64, sections: I) -> String
where
    I: IntoIterator<Item = (String, f64)>,
{
    sections
        .into_iter()
        .fold(String::new(), |current, (id, top)| {
            if scroll_offset >= top - lead_margin {
                id
            } else {
                current
            }
        })
}

/// Whether a link with `href` points at `current`.
pub fn links_to(href: Option<&str>, current: &str) -> bool {
    if current.is_empty() {
        return false;
    }
    href.and_then(|href| href.strip_prefix('#')) == Some(current)
}

/// Recompute the current section and move the `active` class to its link.
///
/// Offsets are read now, never cached. Returns the current section id.
pub fn sync_active_link<S: PageSurface>(
    surface: &S,
    sections: &[S::Element],
    links: &[S::Element],
    lead_margin: f64,
) -> String {
    let offset = surface.scroll_offset();
    let current = current_section(
        offset,
        lead_margin,
        sections.iter().map(|section| {
            (surface.attribute(section, ID_ATTR).unwrap_or_default(), surface.offset_top(section))
        }),
    );

    for link in links {
        let href = surface.attribute(link, HREF_ATTR);
        surface.set_class(link, ACTIVE_CLASS, links_to(href.as_deref(), &current));
    }

    tracing::trace!(offset, current = %current, "scroll position synced");
    current
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fake::FakePage;

    fn sections(items: &[(&str, f64)]) -> Vec<(String, f64)> {
        items.iter().map(|(id, top)| (id.to_string(), *top)).collect()
    }

    #[test]
    fn threshold_is_top_minus_margin() {
        let layout = sections(&[("home", 0.0), ("about", 800.0)]);
        assert_eq!(current_section(750.0, 120.0, layout.clone()), "about");
        assert_eq!(current_section(680.0, 120.0, layout.clone()), "about");
        assert_eq!(current_section(679.9, 120.0, layout), "home");
    }

    #[test]
    fn nothing_reached_is_empty() {
        let layout = sections(&[("intro", 400.0), ("work", 1200.0)]);
        assert_eq!(current_section(100.0, 120.0, layout), "");
        assert_eq!(current_section(0.0, 120.0, Vec::new()), "");
    }

    #[test]
    fn last_reached_section_wins() {
        let layout = sections(&[("a", 0.0), ("b", 100.0), ("c", 200.0), ("d", 5000.0)]);
        assert_eq!(current_section(1000.0, 120.0, layout), "c");
    }

    #[test]
    fn links_match_on_fragment_only() {
        assert!(links_to(Some("#about"), "about"));
        assert!(!links_to(Some("about"), "about"));
        assert!(!links_to(Some("#about-me"), "about"));
        assert!(!links_to(None, "about"));
        assert!(!links_to(Some("#"), ""));
    }

    #[test]
    fn moves_active_class_between_links() {
        let page = FakePage::new();
        let home = page.section("home", 0.0);
        let about = page.section("about", 800.0);
        let home_link = page.nav_link("#home");
        let about_link = page.nav_link("#about");
        let external = page.nav_link("https://example.com");

        let sections = [home, about];
        let links = [home_link, about_link, external];

        page.scroll_to(10.0);
        assert_eq!(sync_active_link(&page, &sections, &links, 120.0), "home");
        assert_eq!(page.with_class(ACTIVE_CLASS), vec![home_link]);

        page.scroll_to(750.0);
        assert_eq!(sync_active_link(&page, &sections, &links, 120.0), "about");
        assert_eq!(page.with_class(ACTIVE_CLASS), vec![about_link]);
    }

    #[test]
    fn clears_links_above_first_section() {
        let page = FakePage::new();
        let hero = page.section("hero", 300.0);
        let link = page.nav_link("#hero");

        page.scroll_to(500.0);
        sync_active_link(&page, &[hero], &[link], 120.0);
        assert!(page.has_class(link, ACTIVE_CLASS));

        page.scroll_to(0.0);
        assert_eq!(sync_active_link(&page, &[hero], &[link], 120.0), "");
        assert!(!page.has_class(link, ACTIVE_CLASS));
    }

    #[test]
    fn reached_section_without_id_clears_links() {
        let page = FakePage::new();
        let home = page.section("home", 0.0);
        let footer = page.anonymous_section(900.0);
        let link = page.nav_link("#home");

        page.scroll_to(1000.0);
        assert_eq!(sync_active_link(&page, &[home, footer], &[link], 120.0), "");
        assert!(page.with_class(ACTIVE_CLASS).is_empty());
    }

    #[test]
    fn lead_margin_shifts_the_threshold() {
        let page = FakePage::new();
        let about = page.section("about", 800.0);
        let link = page.nav_link("#about");

        page.scroll_to(700.0);
        assert_eq!(sync_active_link(&page, &[about], &[link], 0.0), "");
        assert_eq!(sync_active_link(&page, &[about], &[link], 120.0), "about");
    }
}

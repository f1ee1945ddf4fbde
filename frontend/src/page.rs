//! One-shot wiring of every page behavior.

use std::rc::Rc;

use folio_shared::markers::DARK_MODE_TOGGLE_ID;

use crate::{
    config::BehaviorConfig,
    project_filter, scroll_spy,
    surface::{Marker, PageSurface},
    theme,
};

/// What [`install`] found on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Installed {
    /// Sections tracked by the scroll spy.
    pub sections: usize,
    /// Navigation links the scroll spy keeps in sync.
    pub nav_links: usize,
    /// Filter buttons that received a click handler.
    pub filter_buttons: usize,
    /// Project entries the filter controls.
    pub projects: usize,
    /// Whether the dark-mode toggle was found and wired.
    pub theme_toggle: bool,
}

/// Register the scroll spy, the project filter and the theme toggle.
///
/// Element groups are captured once, here; attributes and offsets are read
/// when events fire. The three behaviors are independent: a page without
/// filter buttons still gets its theme toggle, and vice versa.
pub fn install<S: PageSurface + 'static>(surface: Rc<S>, config: BehaviorConfig) -> Installed {
    let sections: Rc<[S::Element]> = surface.query(Marker::Section).into();
    let links: Rc<[S::Element]> = surface.query(Marker::NavLink).into();
    {
        let surface_for_scroll = Rc::clone(&surface);
        let sections = Rc::clone(&sections);
        let links = Rc::clone(&links);
        let lead_margin = config.scroll_lead_margin;
        surface.on_scroll(Box::new(move || {
            scroll_spy::sync_active_link(&*surface_for_scroll, &sections, &links, lead_margin);
        }));
    }

    let buttons: Rc<[S::Element]> = surface.query(Marker::FilterButton).into();
    let items: Rc<[S::Element]> = surface.query(Marker::ProjectItem).into();
    for button in buttons.iter() {
        let surface_for_click = Rc::clone(&surface);
        let button_for_click = button.clone();
        let buttons = Rc::clone(&buttons);
        let items = Rc::clone(&items);
        surface.on_click(
            button,
            Box::new(move || {
                project_filter::activate(&*surface_for_click, &button_for_click, &buttons, &items);
            }),
        );
    }

    let theme_toggle = match surface.element_by_id(DARK_MODE_TOGGLE_ID) {
        Some(toggle) => {
            let surface_for_click = Rc::clone(&surface);
            surface.on_click(
                &toggle,
                Box::new(move || {
                    theme::toggle(&*surface_for_click);
                }),
            );
            true
        },
        None => {
            tracing::debug!("no #{DARK_MODE_TOGGLE_ID} on page, theme switching unavailable");
            false
        },
    };

    let installed = Installed {
        sections: sections.len(),
        nav_links: links.len(),
        filter_buttons: buttons.len(),
        projects: items.len(),
        theme_toggle,
    };
    tracing::debug!(?installed, "page behaviors installed");
    installed
}

//! The page as seen by the behaviors.

use folio_shared::markers::{
    FILTER_BUTTON_CLASS, NAV_LINK_CLASS, PROJECT_ITEM_CLASS, SECTION_TAG,
};

/// Event callback. Handlers run to completion on the page's event loop.
pub type Handler = Box<dyn Fn()>;

/// Element groups the behaviors bind to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    /// Scroll-tracked page regions.
    Section,
    /// Navigation links pointing at sections.
    NavLink,
    /// Project filter buttons.
    FilterButton,
    /// Displayed project entries.
    ProjectItem,
}

impl Marker {
    /// CSS selector matching every element of this group.
    pub fn selector(self) -> String {
        match self {
            Marker::Section => SECTION_TAG.to_string(),
            Marker::NavLink => format!(".{NAV_LINK_CLASS}"),
            Marker::FilterButton => format!(".{FILTER_BUTTON_CLASS}"),
            Marker::ProjectItem => format!(".{PROJECT_ITEM_CLASS}"),
        }
    }
}

/// Queries, reads, mutations and event registration over a rendered page.
///
/// Every operation is infallible from the caller's point of view: a missing
/// element yields an empty result and a rejected mutation is dropped.
pub trait PageSurface {
    /// Handle to one element of the page.
    type Element: Clone + 'static;

    /// All elements of a group, in document order.
    fn query(&self, marker: Marker) -> Vec<Self::Element>;

    /// The element with the given id, if any.
    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    /// Value of an attribute, `None` when absent.
    fn attribute(&self, element: &Self::Element, name: &str) -> Option<String>;

    /// Distance from the top of the document to the element's top edge.
    fn offset_top(&self, element: &Self::Element) -> f64;

    /// Current vertical scroll offset of the page.
    fn scroll_offset(&self) -> f64;

    /// Add (`present`) or remove a class on an element.
    fn set_class(&self, element: &Self::Element, class: &str, present: bool);

    /// Whether `<body>` carries the class.
    fn root_has_class(&self, class: &str) -> bool;

    /// Add (`present`) or remove a class on `<body>`.
    fn set_root_class(&self, class: &str, present: bool);

    /// Show the element with its stylesheet display, or hide it.
    fn set_visible(&self, element: &Self::Element, visible: bool);

    /// Run `handler` on every page scroll.
    fn on_scroll(&self, handler: Handler);

    /// Run `handler` on every click of `element`.
    fn on_click(&self, element: &Self::Element, handler: Handler);
}

//! Markup contract shared by the page server and the page-behavior script.
//!
//! The server renders these names into the HTML, the script queries them back
//! out of the DOM. Keep both sides pointed at this module.

/// Element kind of the scroll-tracked page regions.
pub const SECTION_TAG: &str = "section";

/// Class carried by every navigation link.
pub const NAV_LINK_CLASS: &str = "nav-link";

/// Class carried by every project filter button.
pub const FILTER_BUTTON_CLASS: &str = "filter-btn";

/// Class carried by every displayed project entry.
pub const PROJECT_ITEM_CLASS: &str = "project-item";

/// Attribute holding a technology label (filter buttons) or the
/// comma-joined tech stack (project entries).
pub const TECH_ATTR: &str = "data-tech";

/// Attribute a navigation link points at its section with.
pub const HREF_ATTR: &str = "href";

/// Attribute identifying a section.
pub const ID_ATTR: &str = "id";

/// Id of the optional dark-mode toggle control.
pub const DARK_MODE_TOGGLE_ID: &str = "dark-mode-toggle";

/// Class toggled on `<body>` while the dark theme is on.
pub const DARK_MODE_CLASS: &str = "dark-mode";

/// Class marking the current navigation link or filter button.
pub const ACTIVE_CLASS: &str = "active";

/// Filter label that shows every project.
pub const ALL_FILTER: &str = "all";

/// Separator used when a tech stack is flattened into [`TECH_ATTR`].
pub const TECH_SEPARATOR: &str = ",";

/// Section ids rendered by the page server, in document order.
pub const PAGE_SECTIONS: [&str; 5] = ["home", "about", "projects", "skills", "contact"];

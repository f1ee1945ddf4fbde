//! In-memory page used by the unit tests.

use std::{
    cell::{Cell, RefCell},
    collections::{BTreeMap, BTreeSet, HashMap},
};

use folio_shared::markers::{DARK_MODE_TOGGLE_ID, HREF_ATTR, ID_ATTR, TECH_ATTR};

use crate::surface::{Handler, Marker, PageSurface};

/// Index of a node in [`FakePage`].
pub type NodeId = usize;

#[derive(Default)]
struct Node {
    marker: Option<Marker>,
    attributes: BTreeMap<String, String>,
    classes: BTreeSet<String>,
    hidden: bool,
    offset_top: f64,
}

#[derive(Default)]
pub struct FakePage {
    nodes: RefCell<Vec<Node>>,
    body_classes: RefCell<BTreeSet<String>>,
    scroll: Cell<f64>,
    scroll_handlers: RefCell<Vec<Handler>>,
    click_handlers: RefCell<HashMap<NodeId, Vec<Handler>>>,
}

impl FakePage {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, marker: Option<Marker>, attributes: &[(&str, &str)], offset_top: f64) -> NodeId {
        let mut nodes = self.nodes.borrow_mut();
        nodes.push(Node {
            marker,
            attributes: attributes
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            offset_top,
            ..Node::default()
        });
        nodes.len() - 1
    }

    pub fn section(&self, id: &str, top: f64) -> NodeId {
        self.push(Some(Marker::Section), &[(ID_ATTR, id)], top)
    }

    pub fn anonymous_section(&self, top: f64) -> NodeId {
        self.push(Some(Marker::Section), &[], top)
    }

    pub fn nav_link(&self, href: &str) -> NodeId {
        self.push(Some(Marker::NavLink), &[(HREF_ATTR, href)], 0.0)
    }

    pub fn filter_button(&self, label: &str) -> NodeId {
        self.push(Some(Marker::FilterButton), &[(TECH_ATTR, label)], 0.0)
    }

    pub fn unlabeled_filter_button(&self) -> NodeId {
        self.push(Some(Marker::FilterButton), &[], 0.0)
    }

    pub fn project(&self, tags: &str) -> NodeId {
        self.push(Some(Marker::ProjectItem), &[(TECH_ATTR, tags)], 0.0)
    }

    pub fn untagged_project(&self) -> NodeId {
        self.push(Some(Marker::ProjectItem), &[], 0.0)
    }

    pub fn dark_mode_toggle(&self) -> NodeId {
        self.push(None, &[(ID_ATTR, DARK_MODE_TOGGLE_ID)], 0.0)
    }

    pub fn move_to(&self, node: NodeId, top: f64) {
        self.nodes.borrow_mut()[node].offset_top = top;
    }

    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.nodes.borrow()[node].classes.contains(class)
    }

    pub fn is_visible(&self, node: NodeId) -> bool {
        !self.nodes.borrow()[node].hidden
    }

    pub fn with_class(&self, class: &str) -> Vec<NodeId> {
        self.nodes
            .borrow()
            .iter()
            .enumerate()
            .filter(|(_, node)| node.classes.contains(class))
            .map(|(id, _)| id)
            .collect()
    }

    pub fn click_handler_count(&self, node: NodeId) -> usize {
        self.click_handlers
            .borrow()
            .get(&node)
            .map_or(0, Vec::len)
    }

    pub fn scroll_to(&self, offset: f64) {
        self.scroll.set(offset);
        for handler in self.scroll_handlers.borrow().iter() {
            handler();
        }
    }

    pub fn click(&self, node: NodeId) {
        if let Some(handlers) = self.click_handlers.borrow().get(&node) {
            for handler in handlers {
                handler();
            }
        }
    }
}

impl PageSurface for FakePage {
    type Element = NodeId;

    fn query(&self, marker: Marker) -> Vec<NodeId> {
        self.nodes
            .borrow()
            .iter()
            .enumerate()
            .filter(|(_, node)| node.marker == Some(marker))
            .map(|(id, _)| id)
            .collect()
    }

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.nodes
            .borrow()
            .iter()
            .position(|node| node.attributes.get(ID_ATTR).map(String::as_str) == Some(id))
    }

    fn attribute(&self, element: &NodeId, name: &str) -> Option<String> {
        self.nodes.borrow()[*element].attributes.get(name).cloned()
    }

    fn offset_top(&self, element: &NodeId) -> f64 {
        self.nodes.borrow()[*element].offset_top
    }

    fn scroll_offset(&self) -> f64 {
        self.scroll.get()
    }

    fn set_class(&self, element: &NodeId, class: &str, present: bool) {
        let mut nodes = self.nodes.borrow_mut();
        let classes = &mut nodes[*element].classes;
        if present {
            classes.insert(class.to_string());
        } else {
            classes.remove(class);
        }
    }

    fn root_has_class(&self, class: &str) -> bool {
        self.body_classes.borrow().contains(class)
    }

    fn set_root_class(&self, class: &str, present: bool) {
        let mut classes = self.body_classes.borrow_mut();
        if present {
            classes.insert(class.to_string());
        } else {
            classes.remove(class);
        }
    }

    fn set_visible(&self, element: &NodeId, visible: bool) {
        self.nodes.borrow_mut()[*element].hidden = !visible;
    }

    fn on_scroll(&self, handler: Handler) {
        self.scroll_handlers.borrow_mut().push(handler);
    }

    fn on_click(&self, element: &NodeId, handler: Handler) {
        self.click_handlers
            .borrow_mut()
            .entry(*element)
            .or_default()
            .push(handler);
    }
}

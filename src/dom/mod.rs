//! Host document model
//!
//! A small arena-backed element tree standing in for the browser document:
//! stable element ids, class lists, attributes and inline styles. Renderers
//! build structure through [`El`] and never interpolate markup; all text
//! and attribute values are escaped by the serializer.

mod builder;
mod serialize;

pub use builder::El;
pub use serialize::{escape_attr, escape_text};

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::error::{Result, SiteError};

/// Handle to a node in a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
pub struct Element {
    tag: String,
    attrs: Vec<(String, String)>,
    classes: SmallVec<[String; 4]>,
    styles: Vec<(String, String)>,
}

#[derive(Debug, Clone)]
enum NodeData {
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone)]
struct Node {
    data: NodeData,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Node>,
    root: NodeId,
    ids: FxHashMap<String, NodeId>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Empty document with an `<html>` root.
    pub fn new() -> Self {
        let mut doc = Self {
            nodes: Vec::new(),
            root: NodeId(0),
            ids: FxHashMap::default(),
        };
        doc.root = doc.create_element("html");
        doc
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    // ========================================================================
    // Construction
    // ========================================================================

    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.push(NodeData::Element(Element {
            tag: tag.to_string(),
            attrs: Vec::new(),
            classes: SmallVec::new(),
            styles: Vec::new(),
        }))
    }

    pub fn create_text(&mut self, text: &str) -> NodeId {
        self.push(NodeData::Text(text.to_string()))
    }

    fn push(&mut self, data: NodeData) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            data,
            parent: None,
            children: Vec::new(),
        });
        id
    }

    /// Attach `child` as the last child of `parent`, detaching it first if needed.
    ///
    /// Refuses to insert a node under itself or one of its descendants;
    /// returns `false` when the append was rejected.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> bool {
        if self.is_inclusive_ancestor(child, parent) {
            tracing::warn!("Rejected append of {:?} under its own subtree ({:?})", child, parent);
            return false;
        }
        if let Some(old) = self.nodes[child.0].parent.take() {
            self.nodes[old.0].children.retain(|c| *c != child);
        }
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
        self.register_ids(child);
        true
    }

    /// Whether `ancestor` is `node` or lies on its parent chain.
    fn is_inclusive_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(n) = current {
            if n == ancestor {
                return true;
            }
            current = self.nodes[n.0].parent;
        }
        false
    }

    /// Materialize a builder tree and append it under `parent`.
    pub fn append(&mut self, parent: NodeId, el: El) -> NodeId {
        let node = self.build(el);
        self.append_child(parent, node);
        node
    }

    /// Remove every child of `node`. Ids inside the removed subtrees are released.
    pub fn clear_children(&mut self, node: NodeId) {
        let children = std::mem::take(&mut self.nodes[node.0].children);
        for child in children {
            self.nodes[child.0].parent = None;
            self.unregister_ids(child);
        }
    }

    fn register_ids(&mut self, node: NodeId) {
        if !self.is_connected(node) {
            return;
        }
        for n in self.descendants(node) {
            if let Some(id) = self.attr(n, "id").map(str::to_string) {
                self.ids.entry(id).or_insert(n);
            }
        }
    }

    fn unregister_ids(&mut self, node: NodeId) {
        for n in self.descendants(node) {
            if let Some(id) = self.attr(n, "id").map(str::to_string) {
                if self.ids.get(&id) == Some(&n) {
                    self.ids.remove(&id);
                }
            }
        }
    }

    // ========================================================================
    // Lookup
    // ========================================================================

    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.ids.get(id).copied()
    }

    /// Like [`Document::get_element_by_id`] but a missing id is an error.
    pub fn require(&self, id: &str) -> Result<NodeId> {
        self.get_element_by_id(id)
            .ok_or_else(|| SiteError::MissingAnchor(id.to_string()))
    }

    pub fn is_connected(&self, node: NodeId) -> bool {
        let mut current = node;
        loop {
            if current == self.root {
                return true;
            }
            match self.nodes[current.0].parent {
                Some(parent) => current = parent,
                None => return false,
            }
        }
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes[node.0].parent
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        &self.nodes[node.0].children
    }

    /// Child elements only, skipping text nodes.
    pub fn child_elements(&self, node: NodeId) -> Vec<NodeId> {
        self.children(node)
            .iter()
            .copied()
            .filter(|c| self.element(*c).is_some())
            .collect()
    }

    /// `node` and everything below it, in document order.
    pub fn descendants(&self, node: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![node];
        while let Some(n) = stack.pop() {
            out.push(n);
            stack.extend(self.nodes[n.0].children.iter().rev().copied());
        }
        out
    }

    /// Connected elements matching `pred`, in document order.
    pub fn select_all<P>(&self, pred: P) -> Vec<NodeId>
    where
        P: Fn(&Element) -> bool,
    {
        self.descendants(self.root)
            .into_iter()
            .filter(|n| self.element(*n).map(&pred).unwrap_or(false))
            .collect()
    }

    /// Equivalent of `querySelectorAll('.class')`.
    pub fn elements_with_class(&self, class: &str) -> Vec<NodeId> {
        self.select_all(|el| el.has_class(class))
    }

    /// Equivalent of `querySelector('.class')`.
    pub fn first_with_class(&self, class: &str) -> Option<NodeId> {
        self.elements_with_class(class).into_iter().next()
    }

    // ========================================================================
    // Element access
    // ========================================================================

    pub fn element(&self, node: NodeId) -> Option<&Element> {
        match &self.nodes[node.0].data {
            NodeData::Element(el) => Some(el),
            NodeData::Text(_) => None,
        }
    }

    fn element_mut(&mut self, node: NodeId) -> Option<&mut Element> {
        match &mut self.nodes[node.0].data {
            NodeData::Element(el) => Some(el),
            NodeData::Text(_) => None,
        }
    }

    pub fn tag(&self, node: NodeId) -> Option<&str> {
        self.element(node).map(|el| el.tag.as_str())
    }

    pub fn attr(&self, node: NodeId, name: &str) -> Option<&str> {
        self.element(node).and_then(|el| el.attr(name))
    }

    pub fn set_attr(&mut self, node: NodeId, name: &str, value: &str) {
        let is_id = name == "id";
        if is_id {
            if let Some(old) = self.attr(node, "id").map(str::to_string) {
                if self.ids.get(&old) == Some(&node) {
                    self.ids.remove(&old);
                }
            }
        }
        if let Some(el) = self.element_mut(node) {
            el.set_attr(name, value);
        }
        if is_id && self.is_connected(node) {
            self.ids.entry(value.to_string()).or_insert(node);
        }
    }

    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.element(node).map(|el| el.has_class(class)).unwrap_or(false)
    }

    /// Returns `true` if the class was not already present.
    pub fn add_class(&mut self, node: NodeId, class: &str) -> bool {
        match self.element_mut(node) {
            Some(el) if !el.has_class(class) => {
                el.classes.push(class.to_string());
                true
            }
            _ => false,
        }
    }

    pub fn remove_class(&mut self, node: NodeId, class: &str) {
        if let Some(el) = self.element_mut(node) {
            el.classes.retain(|c| c != class);
        }
    }

    /// Returns whether the class is present afterwards.
    pub fn toggle_class(&mut self, node: NodeId, class: &str) -> bool {
        if self.has_class(node, class) {
            self.remove_class(node, class);
            false
        } else {
            self.add_class(node, class);
            true
        }
    }

    pub fn style(&self, node: NodeId, property: &str) -> Option<&str> {
        self.element(node).and_then(|el| {
            el.styles
                .iter()
                .find(|(k, _)| k == property)
                .map(|(_, v)| v.as_str())
        })
    }

    pub fn set_style(&mut self, node: NodeId, property: &str, value: &str) {
        if let Some(el) = self.element_mut(node) {
            match el.styles.iter_mut().find(|(k, _)| k == property) {
                Some((_, v)) => *v = value.to_string(),
                None => el.styles.push((property.to_string(), value.to_string())),
            }
        }
    }

    // ========================================================================
    // Text
    // ========================================================================

    /// Concatenated text of `node` and its descendants.
    pub fn text_content(&self, node: NodeId) -> String {
        self.descendants(node)
            .into_iter()
            .filter_map(|n| match &self.nodes[n.0].data {
                NodeData::Text(t) => Some(t.as_str()),
                NodeData::Element(_) => None,
            })
            .collect()
    }

    /// Replace all children of `node` with a single text node.
    pub fn set_text_content(&mut self, node: NodeId, text: &str) {
        self.clear_children(node);
        let text = self.create_text(text);
        self.append_child(node, text);
    }

    // ========================================================================
    // Serialization
    // ========================================================================

    /// Serialize the whole document, doctype included.
    pub fn to_html(&self) -> String {
        let mut out = String::with_capacity(4096);
        out.push_str("<!DOCTYPE html>\n");
        serialize::write_node(self, self.root, &mut out);
        out.push('\n');
        out
    }

    pub fn outer_html(&self, node: NodeId) -> String {
        let mut out = String::new();
        serialize::write_node(self, node, &mut out);
        out
    }

    pub fn inner_html(&self, node: NodeId) -> String {
        let mut out = String::new();
        for child in self.children(node) {
            serialize::write_node(self, *child, &mut out);
        }
        out
    }

    fn text_of(&self, node: NodeId) -> Option<&str> {
        match &self.nodes[node.0].data {
            NodeData::Text(t) => Some(t),
            NodeData::Element(_) => None,
        }
    }
}

impl Element {
    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        if name == "class" {
            return None;
        }
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    fn set_attr(&mut self, name: &str, value: &str) {
        if name == "class" {
            self.classes = value.split_whitespace().map(str::to_string).collect();
            return;
        }
        match self.attrs.iter_mut().find(|(k, _)| k == name) {
            Some((_, v)) => *v = value.to_string(),
            None => self.attrs.push((name.to_string(), value.to_string())),
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }
}

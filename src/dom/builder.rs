//! Structured element construction.

use super::{Document, NodeId};

#[derive(Debug, Clone)]
enum Child {
    Element(El),
    Text(String),
}

/// Detached element description, materialized with [`Document::append`].
///
/// ```ignore
/// let card = El::new("a")
///     .class("project-card")
///     .attr("href", &project.external_link)
///     .child(El::new("h3").class("project-title").text(&project.title));
/// doc.append(grid, card);
/// ```
#[derive(Debug, Clone)]
pub struct El {
    tag: String,
    attrs: Vec<(String, String)>,
    styles: Vec<(String, String)>,
    children: Vec<Child>,
}

impl El {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            attrs: Vec::new(),
            styles: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn id(self, id: &str) -> Self {
        self.attr("id", id)
    }

    /// Space-separated class names are accepted, e.g. `"fas fa-file-pdf"`.
    pub fn class(mut self, class: &str) -> Self {
        match self.attrs.iter_mut().find(|(k, _)| k == "class") {
            Some((_, v)) => {
                v.push(' ');
                v.push_str(class);
            }
            None => self.attrs.push(("class".to_string(), class.to_string())),
        }
        self
    }

    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.attrs.push((name.to_string(), value.to_string()));
        self
    }

    pub fn style(mut self, property: &str, value: &str) -> Self {
        self.styles.push((property.to_string(), value.to_string()));
        self
    }

    /// Link that opens in a new browsing context without an opener.
    pub fn external_link(self, href: &str) -> Self {
        self.attr("href", href)
            .attr("target", "_blank")
            .attr("rel", "noopener noreferrer")
    }

    /// Append a text child. The text is escaped on output.
    pub fn text(mut self, text: &str) -> Self {
        self.children.push(Child::Text(text.to_string()));
        self
    }

    pub fn child(mut self, child: El) -> Self {
        self.children.push(Child::Element(child));
        self
    }

    pub fn children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = El>,
    {
        self.children.extend(children.into_iter().map(Child::Element));
        self
    }

    pub fn child_if(self, child: Option<El>) -> Self {
        match child {
            Some(c) => self.child(c),
            None => self,
        }
    }
}

impl Document {
    /// Materialize a builder tree as a detached subtree.
    pub fn build(&mut self, el: El) -> NodeId {
        let node = self.create_element(&el.tag);
        for (name, value) in &el.attrs {
            self.set_attr(node, name, value);
        }
        for (property, value) in &el.styles {
            self.set_style(node, property, value);
        }
        for child in el.children {
            let child_node = match child {
                Child::Element(c) => self.build(c),
                Child::Text(t) => self.create_text(&t),
            };
            self.append_child(node, child_node);
        }
        node
    }
}

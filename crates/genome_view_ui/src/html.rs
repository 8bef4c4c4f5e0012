//! Minimal HTML element builder
//!
//! Table rows, swatches and tooltips are emitted as HTML fragments that the
//! page inserts into its tables. Text and attribute values are always escaped.

use std::fmt;

/// Elements that never have children or a closing tag.
const VOID_TAGS: &[&str] = &["br", "hr", "img", "input", "meta"];

/// Escape text for use in HTML content and double-quoted attribute values.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// A child of an [`Element`].
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Nested element
    Element(Element),
    /// Text content, escaped on render
    Text(String),
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

/// An HTML element with attributes and children.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    tag: &'static str,
    attrs: Vec<(String, String)>,
    classes: Vec<String>,
    styles: Vec<(String, String)>,
    children: Vec<Node>,
}

/// Create a new element with the given tag name.
pub fn element(tag: &'static str) -> Element {
    Element::new(tag)
}

/// Create a text node.
pub fn text(content: impl Into<String>) -> Node {
    Node::Text(content.into())
}

impl Element {
    /// Create a new element with the given tag name
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            classes: Vec::new(),
            styles: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Set an attribute. Setting the same attribute twice keeps the last value.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        if let Some(existing) = self.attrs.iter_mut().find(|(n, _)| *n == name) {
            existing.1 = value;
        } else {
            self.attrs.push((name, value));
        }
        self
    }

    /// Set a boolean attribute (e.g. `checked`) when `enabled` is true.
    pub fn flag(self, name: &str, enabled: bool) -> Self {
        if enabled {
            self.attr(name, name)
        } else {
            self
        }
    }

    /// Add a CSS class
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Add an inline style property
    pub fn style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.styles.push((property.into(), value.into()));
        self
    }

    /// Append a child element or text node
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Append several children
    pub fn children<I, N>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    /// Append a text node
    pub fn text(self, content: impl Into<String>) -> Self {
        self.child(text(content))
    }

    /// Tag name of this element
    pub fn tag(&self) -> &'static str {
        self.tag
    }

    /// Look up an attribute value
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Render to an HTML string
    pub fn render(&self) -> String {
        self.to_string()
    }

    fn is_void(&self) -> bool {
        VOID_TAGS.contains(&self.tag)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.tag)?;
        if !self.classes.is_empty() {
            write!(f, " class=\"{}\"", escape(&self.classes.join(" ")))?;
        }
        for (name, value) in &self.attrs {
            write!(f, " {}=\"{}\"", name, escape(value))?;
        }
        if !self.styles.is_empty() {
            let style: Vec<String> = self
                .styles
                .iter()
                .map(|(p, v)| format!("{}: {};", p, v))
                .collect();
            write!(f, " style=\"{}\"", escape(&style.join(" ")))?;
        }
        write!(f, ">")?;

        if self.is_void() {
            return Ok(());
        }

        for child in &self.children {
            match child {
                Node::Element(e) => write!(f, "{}", e)?,
                Node::Text(t) => write!(f, "{}", escape(t))?,
            }
        }
        write!(f, "</{}>", self.tag)
    }
}

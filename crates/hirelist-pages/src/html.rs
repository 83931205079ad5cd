//! HTML Element Builder
//!
//! A fluent API for building an element tree that serialises to escaped
//! HTML. The same tree serves server-side rendering and the browser mount.
//!
//! ## Example
//!
//! ```
//! use hirelist_pages::html::{button, div};
//!
//! let html = div()
//!     .class("toolbar")
//!     .child(button().attr("data-action", "export").text("Export"))
//!     .build()
//!     .to_html();
//!
//! assert_eq!(
//!     html,
//!     r#"<div class="toolbar"><button data-action="export">Export</button></div>"#
//! );
//! ```

use std::fmt::Write;

/// Elements that never have children or a closing tag
const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input", "meta", "link"];

/// A node in the tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
	/// An element with attributes and children
	Element(Element),
	/// Escaped text
	Text(String),
}

impl Node {
	fn write_html(&self, out: &mut String) {
		match self {
			Self::Element(element) => element.write_html(out),
			Self::Text(text) => escape_into(out, text),
		}
	}

	fn write_text(&self, out: &mut String) {
		match self {
			Self::Element(element) => {
				for child in &element.children {
					child.write_text(out);
				}
			}
			Self::Text(text) => out.push_str(text),
		}
	}
}

impl From<Element> for Node {
	fn from(element: Element) -> Self {
		Self::Element(element)
	}
}

impl From<ElementBuilder> for Node {
	fn from(builder: ElementBuilder) -> Self {
		Self::Element(builder.build())
	}
}

/// A built element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
	tag: &'static str,
	attributes: Vec<(String, Option<String>)>,
	children: Vec<Node>,
}

impl Element {
	/// Tag name
	pub fn tag(&self) -> &str {
		self.tag
	}

	/// Value of an attribute; boolean attributes yield `Some("")`
	pub fn attr(&self, name: &str) -> Option<&str> {
		self.attributes
			.iter()
			.find(|(key, _)| key == name)
			.map(|(_, value)| value.as_deref().unwrap_or(""))
	}

	/// Whether an attribute is present
	pub fn has_attr(&self, name: &str) -> bool {
		self.attributes.iter().any(|(key, _)| key == name)
	}

	/// Child nodes
	pub fn children(&self) -> &[Node] {
		&self.children
	}

	/// Concatenated text of all descendants
	pub fn text_content(&self) -> String {
		let mut out = String::new();
		for child in &self.children {
			child.write_text(&mut out);
		}
		out
	}

	/// Every descendant element (depth-first, this element included) matching `pred`
	pub fn find_all(&self, pred: impl Fn(&Element) -> bool + Copy) -> Vec<&Element> {
		let mut found = Vec::new();
		self.collect(pred, &mut found);
		found
	}

	/// First descendant element matching `pred`
	pub fn find(&self, pred: impl Fn(&Element) -> bool + Copy) -> Option<&Element> {
		self.find_all(pred).into_iter().next()
	}

	fn collect<'a>(&'a self, pred: impl Fn(&Element) -> bool + Copy, found: &mut Vec<&'a Element>) {
		if pred(self) {
			found.push(self);
		}
		for child in &self.children {
			if let Node::Element(element) = child {
				element.collect(pred, found);
			}
		}
	}

	/// Serialises the tree
	pub fn to_html(&self) -> String {
		let mut out = String::new();
		self.write_html(&mut out);
		out
	}

	fn write_html(&self, out: &mut String) {
		out.push('<');
		out.push_str(self.tag);
		for (name, value) in &self.attributes {
			out.push(' ');
			out.push_str(name);
			if let Some(value) = value {
				out.push_str("=\"");
				escape_into(out, value);
				out.push('"');
			}
		}
		out.push('>');
		if VOID_ELEMENTS.contains(&self.tag) {
			return;
		}
		for child in &self.children {
			child.write_html(out);
		}
		let _ = write!(out, "</{}>", self.tag);
	}
}

/// HTML element builder with fluent API
#[derive(Debug, Clone)]
pub struct ElementBuilder {
	element: Element,
}

impl ElementBuilder {
	/// Start an element with the given tag
	pub fn new(tag: &'static str) -> Self {
		Self {
			element: Element {
				tag,
				attributes: Vec::new(),
				children: Vec::new(),
			},
		}
	}

	/// Set an attribute, replacing an earlier value
	pub fn attr(mut self, name: &str, value: impl Into<String>) -> Self {
		self.set(name, Some(value.into()));
		self
	}

	/// Set a boolean attribute (`disabled`, `selected`) when `on` is true
	pub fn bool_attr(mut self, name: &str, on: bool) -> Self {
		if on {
			self.set(name, None);
		}
		self
	}

	/// Set the class attribute
	///
	/// Multiple calls will overwrite the previous value.
	pub fn class(self, class: &str) -> Self {
		self.attr("class", class)
	}

	/// Set the id attribute
	pub fn id(self, id: &str) -> Self {
		self.attr("id", id)
	}

	/// Append a text node
	pub fn text(mut self, text: impl Into<String>) -> Self {
		self.element.children.push(Node::Text(text.into()));
		self
	}

	/// Append a child element
	pub fn child(mut self, child: impl Into<Node>) -> Self {
		self.element.children.push(child.into());
		self
	}

	/// Append several children
	pub fn children<I>(mut self, children: I) -> Self
	where
		I: IntoIterator,
		I::Item: Into<Node>,
	{
		self.element
			.children
			.extend(children.into_iter().map(Into::into));
		self
	}

	/// Finish building
	pub fn build(self) -> Element {
		self.element
	}

	fn set(&mut self, name: &str, value: Option<String>) {
		match self
			.element
			.attributes
			.iter_mut()
			.find(|(key, _)| key == name)
		{
			Some((_, existing)) => *existing = value,
			None => self.element.attributes.push((name.to_string(), value)),
		}
	}
}

fn escape_into(out: &mut String, text: &str) {
	for c in text.chars() {
		match c {
			'&' => out.push_str("&amp;"),
			'<' => out.push_str("&lt;"),
			'>' => out.push_str("&gt;"),
			'"' => out.push_str("&quot;"),
			'\'' => out.push_str("&#x27;"),
			_ => out.push(c),
		}
	}
}

macro_rules! elements {
	($($name:ident),* $(,)?) => {
		$(
			#[doc = concat!("Start a `<", stringify!($name), ">` element")]
			pub fn $name() -> ElementBuilder {
				ElementBuilder::new(stringify!($name))
			}
		)*
	};
}

elements!(
	a, button, div, h1, input, li, nav, option, select, span, table, tbody, td, th, thead, tr,
	ul,
);

//! Selector-based access to parsed HTML.
//!
//! The extractor only needs three operations: find descendants by CSS
//! selector, read a node's text, and read an attribute. `MarkupNode` captures
//! that; `HtmlNode` implements it on top of `scraper`.

use scraper::{ElementRef, Html, Selector};
use tracing::warn;

/// Read-only view of a node in a parsed markup tree.
pub trait MarkupNode: Sized {
    /// Descendants matching `selector`, in document order. An invalid
    /// selector matches nothing.
    fn find(&self, selector: &str) -> Vec<Self>;

    /// All text under this node, concatenated.
    fn text(&self) -> String;

    /// Value of attribute `name`, if present.
    fn attr(&self, name: &str) -> Option<String>;
}

/// A parsed HTML document.
pub struct HtmlDocument {
    html: Html,
}

impl HtmlDocument {
    pub fn parse(markup: &str) -> Self {
        Self {
            html: Html::parse_document(markup),
        }
    }

    /// The document's root element.
    pub fn root(&self) -> HtmlNode<'_> {
        HtmlNode {
            element: self.html.root_element(),
        }
    }
}

/// An element inside an [`HtmlDocument`].
#[derive(Clone, Copy, Debug)]
pub struct HtmlNode<'a> {
    element: ElementRef<'a>,
}

impl<'a> MarkupNode for HtmlNode<'a> {
    fn find(&self, selector: &str) -> Vec<Self> {
        match Selector::parse(selector) {
            Ok(parsed) => self
                .element
                .select(&parsed)
                .map(|element| HtmlNode { element })
                .collect(),
            Err(e) => {
                warn!("Invalid selector {:?}: {:?}", selector, e);
                Vec::new()
            }
        }
    }

    fn text(&self) -> String {
        self.element.text().collect()
    }

    fn attr(&self, name: &str) -> Option<String> {
        self.element.value().attr(name).map(str::to_string)
    }
}

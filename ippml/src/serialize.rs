//! Serializer for the phone XML dialect.
//!
//! The output format is fixed by the device:
//! - children are indented one unit per level (a tab by default)
//! - empty elements self-close as `<Tag />`
//! - an element with text contents but no children renders the text inline
//! - a screen emits its content element (alert, list, text box, player or
//!   form) ahead of every other child, regardless of insertion order
//!
//! Attribute values are written verbatim; the dialect performs no XML
//! escaping. This mirrors what the device firmware expects; callers supply
//! pre-sanitized text.

use std::fmt::Write;

use crate::dom::{Document, NodeId};
use crate::elements::Element;
use crate::error::Error;

/// Options for rendering a tree to text.
#[derive(Clone, Debug)]
pub struct SerializeOptions {
    /// Indentation unit (default: one tab, as the device dialect uses).
    pub indent: String,
}

impl Default for SerializeOptions {
    fn default() -> Self {
        Self {
            indent: "\t".to_string(),
        }
    }
}

impl SerializeOptions {
    /// Create default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a custom indentation unit.
    pub fn indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }
}

/// Render the tree rooted at `node` to XML text, without the document
/// header and without ancestor synthesis (see [`Document::to_xml`] for the
/// full document form).
pub fn render(doc: &Document, node: NodeId, options: &SerializeOptions) -> Result<String, Error> {
    doc.check(node)?;
    let mut out = String::new();
    let mut ser = Serializer {
        doc,
        out: &mut out,
        options,
        depth: 0,
    };
    ser.write_node(node)?;
    Ok(out)
}

struct Serializer<'a> {
    doc: &'a Document,
    out: &'a mut String,
    options: &'a SerializeOptions,
    depth: usize,
}

impl Serializer<'_> {
    fn write_indent(&mut self) {
        for _ in 0..self.depth {
            self.out.push_str(&self.options.indent);
        }
    }

    fn write_node(&mut self, id: NodeId) -> Result<(), Error> {
        // Resolves the render order up front; also enforces that a screen
        // has its mandatory content element.
        let children = self.ordered_children(id)?;

        let element = self.doc.get(id).element();
        self.write_indent();
        let _ = write!(self.out, "<{}", element.tag());
        element.first_attributes(self.out);
        element.attributes(self.out);

        if self.doc.is_empty(id) {
            self.out.push_str(" />\n");
            return Ok(());
        }
        self.out.push('>');

        if children.is_empty() {
            self.out.push_str(self.doc.text(id));
        } else {
            self.out.push('\n');
            self.depth += 1;
            for child in children {
                self.write_node(child)?;
            }
            self.depth -= 1;
            self.write_indent();
        }
        let _ = write!(self.out, "</{}>", self.doc.get(id).element().tag());
        self.out.push('\n');
        Ok(())
    }

    /// Children in render order: insertion order everywhere, except that a
    /// screen's content element always comes first.
    fn ordered_children(&self, id: NodeId) -> Result<Vec<NodeId>, Error> {
        if let Element::Screen(s) = self.doc.get(id).element() {
            let unique = s.unique_child().ok_or(Error::MissingRequiredChild {
                container: "IppScreen",
                expected: "IppList, IppTextBox, IppAlert, IppPlayer or IppForm",
            })?;
            let mut ordered = Vec::with_capacity(self.doc.child_count(id));
            ordered.push(unique);
            ordered.extend(self.doc.children(id).filter(|&child| child != unique));
            Ok(ordered)
        } else {
            Ok(self.doc.children(id).collect())
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CommandType, DisplayOn, Document};

    fn render_default(doc: &Document, node: NodeId) -> String {
        render(doc, node, &SerializeOptions::default()).unwrap()
    }

    #[test]
    fn test_empty_element_self_closes() {
        let mut doc = Document::new();
        let spacer = doc.spacer(None);
        assert_eq!(render_default(&doc, spacer), "<IppSpacer />\n");
    }

    #[test]
    fn test_text_renders_inline() {
        let mut doc = Document::new();
        let ticker = doc.ticker("breaking news");
        assert_eq!(
            render_default(&doc, ticker),
            "<IppTicker>\n\t<Text>breaking news</Text>\n</IppTicker>\n"
        );
    }

    #[test]
    fn test_custom_indent() {
        let mut doc = Document::new();
        let ticker = doc.ticker("x");
        let options = SerializeOptions::new().indent("  ");
        assert_eq!(
            render(&doc, ticker, &options).unwrap(),
            "<IppTicker>\n  <Text>x</Text>\n</IppTicker>\n"
        );
    }

    #[test]
    fn test_attribute_values_are_not_escaped() {
        let mut doc = Document::new();
        let form = doc.form("a<b", "http://x?a=1&b=2", None);
        let xml = render_default(&doc, form);
        assert!(xml.contains("<Url>http://x?a=1&b=2</Url>"));
        assert!(xml.contains("<Title>a<b</Title>"));
    }

    #[test]
    fn test_screen_renders_content_element_first() {
        let mut doc = Document::new();
        let screen = doc.screen(Some(1));
        let exit = doc
            .command_preset(CommandType::Exit, DisplayOn::Options)
            .unwrap();
        doc.attach(screen, exit).unwrap();
        let form = doc.form("F", "url", None);
        doc.attach(screen, form).unwrap();

        let xml = render_default(&doc, screen);
        let form_at = xml.find("<IppForm").unwrap();
        let command_at = xml.find("<IppCommand").unwrap();
        assert!(form_at < command_at, "content element must render first:\n{xml}");
    }

    #[test]
    fn test_screen_without_content_fails_at_render_time() {
        let mut doc = Document::new();
        let screen = doc.screen(Some(1));
        // attaching commands alone is legal; the gap only shows when rendering
        let exit = doc
            .command_preset(CommandType::Exit, DisplayOn::Options)
            .unwrap();
        doc.attach(screen, exit).unwrap();
        assert!(matches!(
            render(&doc, screen, &SerializeOptions::default()),
            Err(Error::MissingRequiredChild { .. })
        ));
    }

    #[test]
    fn test_empty_screen_also_fails() {
        let mut doc = Document::new();
        let screen = doc.screen(Some(1));
        assert!(matches!(
            render(&doc, screen, &SerializeOptions::default()),
            Err(Error::MissingRequiredChild { .. })
        ));
    }

    #[test]
    fn test_nested_indentation_uses_tabs() {
        let mut doc = Document::new();
        let screen = doc.screen(Some(7));
        let alert = doc.alert("Hi", "There");
        doc.attach(screen, alert).unwrap();
        let xml = render_default(&doc, screen);
        assert_eq!(
            xml,
            "<IppScreen ID=\"7\" CommandCount=\"0\">\n\
             \t<IppAlert Type=\"INFO\" Delay=\"FOREVER\">\n\
             \t\t<Title>Hi</Title>\n\
             \t\t<Text>There</Text>\n\
             \t</IppAlert>\n\
             </IppScreen>\n"
        );
    }
}

//! Document root synthesis.
//!
//! The device only accepts a complete `IppPhone` → `IppDisplay` →
//! `IppScreen` chain. [`Document::to_xml`] lets callers hold on to whatever
//! element they actually built (a bare form, a single screen, a full
//! phone) and synthesizes the missing ancestors at transmission time.

use std::io;

use crate::debug;
use crate::dom::{Document, NodeId};
use crate::elements::Element;
use crate::error::Error;
use crate::serialize::{self, SerializeOptions};

/// Header line every document sent to the device starts with.
pub const XML_HEADER: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>";

impl Document {
    /// Render the tree rooted at `node` as a complete document: the fixed
    /// XML header followed by a full phone/display/screen chain.
    ///
    /// Missing ancestors are synthesized and become part of this document;
    /// `node` is re-parented into the synthesized chain. Content elements
    /// (alert, list, text box, player, form) get a screen with ID 1; any
    /// other kind that is not already a phone, display or screen is
    /// rejected with [`Error::UnsuitableRootCandidate`].
    pub fn to_xml(&mut self, node: NodeId) -> Result<String, Error> {
        let root = self.synthesize_root(node)?;
        let body = serialize::render(self, root, &SerializeOptions::default())?;
        Ok(format!("{XML_HEADER}\n{body}"))
    }

    /// Write the complete document to an output sink.
    pub fn send_to<W: io::Write>(&mut self, node: NodeId, out: &mut W) -> Result<(), Error> {
        let xml = self.to_xml(node)?;
        out.write_all(xml.as_bytes())?;
        Ok(())
    }

    fn synthesize_root(&mut self, node: NodeId) -> Result<NodeId, Error> {
        self.check(node)?;
        if matches!(self.get(node).element, Element::Phone) {
            return Ok(node);
        }

        let display = if matches!(self.get(node).element, Element::Display(_)) {
            node
        } else {
            let screen = if matches!(self.get(node).element, Element::Screen(_)) {
                node
            } else if self.get(node).element.is_screen_content() {
                debug!(
                    tag = self.get(node).element.tag(),
                    "synthesizing screen for a bare content element"
                );
                let screen = self.screen(Some(1));
                self.attach(screen, node)?;
                screen
            } else {
                return Err(Error::UnsuitableRootCandidate {
                    tag: self.get(node).element.tag().to_owned(),
                });
            };
            let display = self.display(None, -1);
            self.attach(display, screen)?;
            display
        };

        let phone = self.phone();
        self.attach(phone, display)?;
        Ok(phone)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use crate::{Document, Error, ListType, XML_HEADER};

    #[test]
    fn test_phone_root_is_used_as_is() {
        let mut doc = Document::new();
        let phone = doc.phone();
        let xml = doc.to_xml(phone).unwrap();
        assert_eq!(xml, format!("{XML_HEADER}\n<IppPhone />\n"));
    }

    #[test]
    fn test_bare_list_gets_a_full_chain() {
        let mut doc = Document::new();
        let list = doc.list("L", "http://srv/pick", ListType::Implicit, 1).unwrap();
        let option = doc.option(&["first"], None, false, "k", "1").unwrap();
        doc.attach(list, option).unwrap();

        let xml = doc.to_xml(list).unwrap();
        assert!(xml.starts_with(XML_HEADER));
        assert!(xml.contains("<IppPhone>"));
        assert!(xml.contains("<IppDisplay>"));
        assert!(xml.contains("<IppScreen ID=\"1\" CommandCount=\"0\">"));
        assert!(xml.contains("<IppList Type=\"IMPLICIT\" Count=\"1\" Columns=\"1\">"));
    }

    #[test]
    fn test_screen_gets_display_and_phone() {
        let mut doc = Document::new();
        let screen = doc.screen(Some(4));
        let alert = doc.alert("T", "B");
        doc.attach(screen, alert).unwrap();

        let xml = doc.to_xml(screen).unwrap();
        // the synthesized display carries neither InitialScreen nor UpdateScreen
        assert!(xml.contains("<IppDisplay>"));
        assert!(xml.contains("<IppScreen ID=\"4\" CommandCount=\"0\">"));
    }

    #[test]
    fn test_form_item_is_not_a_root_candidate() {
        let mut doc = Document::new();
        let item = doc.string_item("a", "b");
        match doc.to_xml(item) {
            Err(Error::UnsuitableRootCandidate { tag }) => assert_eq!(tag, "IppStringItem"),
            other => panic!("expected UnsuitableRootCandidate, got {other:?}"),
        }
    }

    #[test]
    fn test_send_to_writes_the_document() {
        let mut doc = Document::new();
        let alert = doc.alert("Hello", "World");
        let mut sink = Vec::new();
        doc.send_to(alert, &mut sink).unwrap();
        let text = String::from_utf8(sink).unwrap();
        assert!(text.starts_with(XML_HEADER));
        assert!(text.contains("<IppAlert Type=\"INFO\" Delay=\"FOREVER\">"));
    }
}

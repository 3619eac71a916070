//! Insertion rules of the vocabulary.
//!
//! Every public [`Document::attach`] goes through [`validate_and_add`],
//! which dispatches on the (parent kind, child kind) pair: cardinality caps,
//! the one-content-element-per-screen rule, column-count matching for list
//! options, and the counter attributes that containers report on the wire.
//!
//! Violations are raised here, at the mutating call, so a broken tree is
//! never built in the first place. The one exception is the screen's
//! required-content check, which only matters at render time and lives in
//! the serializer.

use crate::dom::{Document, NodeId};
use crate::elements::Element;
use crate::error::Error;

/// What the rule table says about a (parent kind, child kind) pair.
#[derive(Debug, Clone, Copy)]
enum Rule {
    /// Phone holds a single display.
    PhoneDisplay,
    /// Display holds up to five screens.
    DisplayScreen,
    /// One of the five mutually exclusive screen content kinds.
    ScreenContent,
    /// Counted towards the screen's CommandCount.
    ScreenCommand,
    /// Counted towards the screen's HiddenCount.
    ScreenHidden,
    /// Keys, actions and tickers attach to screens without restriction.
    ScreenPlain,
    /// A pre-built item wrapper dropped onto a form.
    FormItemWrapper,
    /// A form item; attaches through its logical root.
    FormFormItem,
    /// Commands on an item wrapper are unbounded.
    ItemCommand,
    /// An item wrapper holds at most one non-command child.
    ItemFormItem,
    /// List options must match the list's column count.
    ListOption,
    /// Choice groups count options without an upper bound.
    ChoiceOption,
    /// Options hold at most three column texts.
    OptionColumnText,
    /// Everything else is rejected.
    Reject,
}

fn decide(parent: &Element, child: &Element) -> Rule {
    match (parent, child) {
        (Element::Phone, Element::Display(_)) => Rule::PhoneDisplay,
        (Element::Display(_), Element::Screen(_)) => Rule::DisplayScreen,
        (Element::Screen(_), child) if child.is_screen_content() => Rule::ScreenContent,
        (Element::Screen(_), Element::Command(_)) => Rule::ScreenCommand,
        (Element::Screen(_), Element::Hidden(_)) => Rule::ScreenHidden,
        (Element::Screen(_), Element::Key(_) | Element::Action(_) | Element::Ticker) => {
            Rule::ScreenPlain
        }
        (Element::Form(_), Element::Item(_)) => Rule::FormItemWrapper,
        (Element::Form(_), child) if child.is_form_item() => Rule::FormFormItem,
        (Element::Item(_), Element::Command(_)) => Rule::ItemCommand,
        (Element::Item(_), child) if child.is_form_item() => Rule::ItemFormItem,
        (Element::List(_), Element::OptionEntry(_)) => Rule::ListOption,
        (Element::ChoiceGroup(_), Element::OptionEntry(_)) => Rule::ChoiceOption,
        (Element::OptionEntry(_), Element::OptionText) => Rule::OptionColumnText,
        _ => Rule::Reject,
    }
}

pub(crate) fn validate_and_add(
    doc: &mut Document,
    parent: NodeId,
    child: NodeId,
) -> Result<NodeId, Error> {
    doc.check(parent)?;
    doc.check(child)?;
    if parent == child {
        return Err(Error::InvalidArgument(
            "a node cannot be added to itself".into(),
        ));
    }

    let rule = decide(&doc.get(parent).element, &doc.get(child).element);
    match rule {
        Rule::PhoneDisplay => {
            if doc.child_count(parent) >= 1 {
                return Err(Error::StructuralConstraintViolation(
                    "no more than one IppDisplay can be added to IppPhone".into(),
                ));
            }
            doc.append_node(parent, child);
            Ok(child)
        }
        Rule::DisplayScreen => {
            if doc.child_count(parent) >= 5 {
                return Err(Error::StructuralConstraintViolation(
                    "no more than five IppScreens can be added to IppDisplay".into(),
                ));
            }
            doc.append_node(parent, child);
            Ok(child)
        }
        Rule::ScreenContent => {
            let occupied = match &doc.get(parent).element {
                Element::Screen(s) => s.unique_child().is_some(),
                _ => unreachable!("rule implies a screen parent"),
            };
            if occupied {
                return Err(Error::StructuralConstraintViolation(format!(
                    "this screen already has a sub-node that prevents adding an {}",
                    doc.get(child).element.tag()
                )));
            }
            doc.append_node(parent, child);
            if let Element::Screen(s) = &mut doc.get_mut(parent).element {
                s.unique = Some(child);
            }
            Ok(child)
        }
        Rule::ScreenCommand => {
            doc.append_node(parent, child);
            if let Element::Screen(s) = &mut doc.get_mut(parent).element {
                s.command_count += 1;
            }
            Ok(child)
        }
        Rule::ScreenHidden => {
            doc.append_node(parent, child);
            if let Element::Screen(s) = &mut doc.get_mut(parent).element {
                s.hidden_count += 1;
            }
            Ok(child)
        }
        Rule::ScreenPlain => {
            doc.append_node(parent, child);
            Ok(child)
        }
        Rule::FormItemWrapper => {
            doc.append_node(parent, child);
            if let Element::Form(f) = &mut doc.get_mut(parent).element {
                f.item_count += 1;
            }
            Ok(child)
        }
        Rule::FormFormItem => {
            // A promoted item lands on the form through its wrapper.
            let target = doc.logical_root(child);
            doc.append_node(parent, target);
            if let Element::Form(f) = &mut doc.get_mut(parent).element {
                f.item_count += 1;
            }
            Ok(target)
        }
        Rule::ItemCommand => {
            doc.append_node(parent, child);
            if let Element::Item(i) = &mut doc.get_mut(parent).element {
                i.command_count += 1;
            }
            Ok(child)
        }
        Rule::ItemFormItem => {
            let occupied = match &doc.get(parent).element {
                Element::Item(i) => i.has_item,
                _ => unreachable!("rule implies an item parent"),
            };
            if occupied {
                return Err(Error::StructuralConstraintViolation(
                    "IppItem can have multiple commands, but only one item".into(),
                ));
            }
            doc.append_node(parent, child);
            if let Element::Item(i) = &mut doc.get_mut(parent).element {
                i.has_item = true;
            }
            Ok(child)
        }
        Rule::ListOption => {
            let columns = match &doc.get(parent).element {
                Element::List(l) => u32::from(l.columns),
                _ => unreachable!("rule implies a list parent"),
            };
            let texts = match &doc.get(child).element {
                Element::OptionEntry(o) => o.text_count(),
                _ => unreachable!("rule implies an option child"),
            };
            if texts != columns {
                return Err(Error::StructuralConstraintViolation(format!(
                    "the option carries {texts} OptionTexts but the list has {columns} columns"
                )));
            }
            doc.append_node(parent, child);
            if let Element::List(l) = &mut doc.get_mut(parent).element {
                l.options += 1;
            }
            Ok(child)
        }
        Rule::ChoiceOption => {
            doc.append_node(parent, child);
            if let Element::ChoiceGroup(g) = &mut doc.get_mut(parent).element {
                g.options += 1;
            }
            Ok(child)
        }
        Rule::OptionColumnText => {
            let texts = match &doc.get(parent).element {
                Element::OptionEntry(o) => o.text_count(),
                _ => unreachable!("rule implies an option parent"),
            };
            if texts >= 3 {
                return Err(Error::StructuralConstraintViolation(
                    "an Option cannot have more than 3 OptionTexts".into(),
                ));
            }
            doc.append_node(parent, child);
            if let Element::OptionEntry(o) = &mut doc.get_mut(parent).element {
                o.texts += 1;
            }
            Ok(child)
        }
        Rule::Reject => Err(Error::StructuralConstraintViolation(format!(
            "{} cannot hold {}",
            doc.get(parent).element.tag(),
            doc.get(child).element.tag()
        ))),
    }
}

// =============================================================================
// Tests
// =============================================================================

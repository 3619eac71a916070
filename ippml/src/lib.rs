//! XML application toolkit for OpenStage 60/80 phone displays.
//!
//! ippml provides:
//! - **Element tree**: arena-based node model with stable ids, parent links,
//!   and transparent item-wrapper promotion
//! - **Schema rules**: per-kind insertion constraints (cardinality caps,
//!   mutually exclusive screen content, column-count matching)
//! - **Serialization**: the indented XML dialect the phone consumes,
//!   including self-closing empty elements and content-first screen ordering
//! - **Root synthesis**: any element can be rendered as a complete document;
//!   missing `IppPhone`/`IppDisplay`/`IppScreen` ancestors are created on
//!   the fly
//!
//! # Example
//!
//! ```rust
//! use ippml::{Document, DisplayOn, Proportion};
//!
//! let mut doc = Document::new();
//! let screen = doc.screen(Some(1));
//! let form = doc.form("Login", "http://pbx.example/login", Some(Proportion::L50R50));
//! doc.attach(screen, form).unwrap();
//!
//! let field = doc.text_field("User", "", "user");
//! let send = doc.command_select("Send", "action", "login", DisplayOn::Options);
//! // Text fields cannot hold commands; the field is promoted into an
//! // IppItem wrapper behind the scenes.
//! doc.attach_command(field, send).unwrap();
//! doc.attach(form, field).unwrap();
//!
//! let xml = doc.to_xml(screen).unwrap();
//! assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
//! assert!(xml.contains("<IppItem CommandCount=\"1\">"));
//! ```

#[cfg(feature = "tracing")]
macro_rules! debug {
    ($($tt:tt)*) => { tracing::debug!($($tt)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! debug {
    ($($tt:tt)*) => {};
}

pub(crate) use debug;

pub mod dom;
pub mod elements;
mod error;
mod root;
mod schema;
pub mod serialize;

// Re-export the tree model at crate root for convenience
pub use dom::{Document, NodeData, NodeId};

// Re-export element payloads and attribute vocabularies
pub use elements::{
    Action, ActionType, Alert, AlertType, BoxConstraint, BoxDefault, BufferKeys, Button,
    ChoiceGroup, ChoiceType, Command, CommandConfig, CommandType, DateDefault, DateField,
    DateMode, Display, DisplayOn, Element, FieldConstraint, Form, Gauge, Hidden, HiddenType,
    Image, ImageType, Interactive, Item, KeyGrab, List, ListType, NewLine, NumberType,
    OptionEntry, PhoneNumber, Player, PlayerMode, PlayerState, Proportion, Screen, Spacer,
    TextAttrs, TextBox, TextField,
};

pub use error::Error;
pub use root::XML_HEADER;
pub use serialize::{SerializeOptions, render};

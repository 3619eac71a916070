//! Typed element catalog for the phone XML vocabulary.
//!
//! Every element kind the device understands is a variant of [`Element`],
//! carrying a typed payload for its attributes. Enumerated attributes are
//! real sum types; their `Display` impls produce the exact labels the device
//! expects on the wire.
//!
//! The constructors on [`Document`] build each kind together with its fixed
//! text children (`Title`, `Label`, `Url`, ...), so a freshly constructed
//! node is already shaped the way the dialect wants it.

use std::fmt::{self, Write};

use crate::dom::{Document, NodeId};
use crate::error::Error;

// =============================================================================
// Attribute vocabularies
// =============================================================================

/// Width split between the left and right column of a form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Proportion {
    /// left column 0%, right 100%
    L0R100,
    /// left column 15%, right 85%
    L15R85,
    /// left column 25%, right 75%
    L25R75,
    /// left column 40%, right 60%
    L40R60,
    /// left column 50%, right 50%
    L50R50,
    /// left column 60%, right 40%
    L60R40,
    /// left column 75%, right 25%
    L75R25,
}

impl fmt::Display for Proportion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Proportion::L0R100 => "0_100",
            Proportion::L15R85 => "15_85",
            Proportion::L25R75 => "25_75",
            Proportion::L40R60 => "40_60",
            Proportion::L50R50 => "50_50",
            Proportion::L60R40 => "60_40",
            Proportion::L75R25 => "75_25",
        })
    }
}

/// Selection behavior of a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListType {
    /// Selecting an option sends its key/value pair immediately.
    Implicit,
    /// Single selection; a SELECT command performs the transfer.
    Exclusive,
    /// Multiple selection; a SELECT command performs the transfer.
    Multiple,
}

impl fmt::Display for ListType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ListType::Implicit => "IMPLICIT",
            ListType::Exclusive => "EXCLUSIVE",
            ListType::Multiple => "MULTIPLE",
        })
    }
}

/// Selection behavior of a choice group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceType {
    Exclusive,
    Multiple,
    Popup,
}

impl fmt::Display for ChoiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ChoiceType::Exclusive => "EXCLUSIVE",
            ChoiceType::Multiple => "MULTIPLE",
            ChoiceType::Popup => "POPUP",
        })
    }
}

/// What a command does when invoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandType {
    /// Send form data and hidden fields to the remote server.
    Select,
    Back,
    Update,
    /// Switch to another screen of the application.
    Screen,
    Cancel,
    /// Quit the application.
    Exit,
}

impl fmt::Display for CommandType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CommandType::Select => "SELECT",
            CommandType::Back => "BACK",
            CommandType::Update => "UPDATE",
            CommandType::Screen => "SCREEN",
            CommandType::Cancel => "CANCEL",
            CommandType::Exit => "EXIT",
        })
    }
}

/// Where a command shows up: the global options menu, the list attached to
/// a specific item, or both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayOn {
    Options,
    ListItem,
    Both,
}

impl fmt::Display for DisplayOn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DisplayOn::Options => "OPTIONS",
            DisplayOn::ListItem => "LISTITEM",
            DisplayOn::Both => "BOTH",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertType {
    Alarm,
    Confirmation,
    Error,
    Info,
    Warning,
}

impl fmt::Display for AlertType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AlertType::Alarm => "ALARM",
            AlertType::Confirmation => "CONFIRMATION",
            AlertType::Error => "ERROR",
            AlertType::Info => "INFO",
            AlertType::Warning => "WARNING",
        })
    }
}

/// Input restriction of a text box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoxConstraint {
    Any,
    Numeric,
    Password,
}

impl fmt::Display for BoxConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BoxConstraint::Any => "ANY",
            BoxConstraint::Numeric => "NUMERIC",
            BoxConstraint::Password => "PASSWORD",
        })
    }
}

/// Source of a text box's initial value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoxDefault {
    Null,
    Text,
    PhoneNumber,
}

impl fmt::Display for BoxDefault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BoxDefault::Null => "NULL",
            BoxDefault::Text => "TEXT",
            BoxDefault::PhoneNumber => "PHONENUMBER",
        })
    }
}

/// Input restriction of a text field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldConstraint {
    Any,
    Numeric,
    Password,
    PhoneNumber,
    Url,
    EmailAddr,
}

impl fmt::Display for FieldConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FieldConstraint::Any => "ANY",
            FieldConstraint::Numeric => "NUMERIC",
            FieldConstraint::Password => "PASSWORD",
            FieldConstraint::PhoneNumber => "PHONENUMBER",
            FieldConstraint::Url => "URL",
            FieldConstraint::EmailAddr => "EMAILADDR",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerMode {
    Call,
    Record,
}

impl fmt::Display for PlayerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PlayerMode::Call => "CALL",
            PlayerMode::Record => "RECORD",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerState {
    Playing,
    Stopped,
    Recording,
}

impl fmt::Display for PlayerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PlayerState::Playing => "PLAYING",
            PlayerState::Stopped => "STOPPED",
            PlayerState::Recording => "RECORDING",
        })
    }
}

/// Whether the user drives a gauge or the device animates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interactive {
    User,
    Auto,
}

impl fmt::Display for Interactive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Interactive::User => "USER",
            Interactive::Auto => "AUTO",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HiddenType {
    Value,
    PhoneNumber,
    IpAddress,
}

impl fmt::Display for HiddenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            HiddenType::Value => "VALUE",
            HiddenType::PhoneNumber => "PHONENUMBER",
            HiddenType::IpAddress => "IPADDRESS",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferKeys {
    Yes,
    No,
    Subsequent,
}

impl fmt::Display for BufferKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BufferKeys::Yes => "YES",
            BufferKeys::No => "NO",
            BufferKeys::Subsequent => "SUBSEQUENT",
        })
    }
}

/// Line breaking around a spacer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewLine {
    After,
    Before,
    BeforeAndAfter,
}

impl fmt::Display for NewLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            NewLine::After => "NEWLINE_AFTER",
            NewLine::Before => "NEWLINE_BEFORE",
            NewLine::BeforeAndAfter => "NEWLINE_BEF_AFT",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateMode {
    Date,
    Time,
    DateTime,
}

impl fmt::Display for DateMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DateMode::Date => "DATE",
            DateMode::Time => "TIME",
            DateMode::DateTime => "DATETIME",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateDefault {
    Null,
    Mode,
}

impl fmt::Display for DateDefault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DateDefault::Null => "NULL",
            DateDefault::Mode => "MODE",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageType {
    PhoneType,
    PictureClip,
}

impl fmt::Display for ImageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ImageType::PhoneType => "PHONETYPE",
            ImageType::PictureClip => "PICTURECLIP",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberType {
    Number,
    Name,
    Both,
}

impl fmt::Display for NumberType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            NumberType::Number => "NUMBER",
            NumberType::Name => "NAME",
            NumberType::Both => "BOTH",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionType {
    MakeCall,
    EndCall,
    TurnLedOn,
    TurnLedOff,
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ActionType::MakeCall => "MAKECALL",
            ActionType::EndCall => "ENDCALL",
            ActionType::TurnLedOn => "TURNLEDON",
            ActionType::TurnLedOff => "TURNLEDOFF",
        })
    }
}

// =============================================================================
// Element payloads
// =============================================================================

/// `IppDisplay`: holds up to five screens.
#[derive(Debug, Clone, Default)]
pub struct Display {
    /// ID of the screen shown first. Omitted from the output when `None`.
    pub initial_screen: Option<i32>,
    /// ID of a screen updated in the background; non-positive values are
    /// not emitted.
    pub update_screen: i32,
}

/// `IppScreen`: one unit of the display, identified by its ID.
///
/// A screen must hold exactly one content element (alert, list, text box,
/// player or form) before it can be rendered.
#[derive(Debug, Clone, Default)]
pub struct Screen {
    pub id: Option<i32>,
    pub(crate) hidden_count: u32,
    pub(crate) command_count: u32,
    /// The exclusive content element, tracked so the serializer can emit it
    /// ahead of every other child.
    pub(crate) unique: Option<NodeId>,
}

impl Screen {
    pub fn hidden_count(&self) -> u32 {
        self.hidden_count
    }

    pub fn command_count(&self) -> u32 {
        self.command_count
    }

    /// The screen's content element, once one has been attached.
    pub fn unique_child(&self) -> Option<NodeId> {
        self.unique
    }
}

/// `IppForm`: sends user-entered data back to the server.
#[derive(Debug, Clone, Default)]
pub struct Form {
    pub(crate) item_count: u32,
    pub proportion: Option<Proportion>,
}

impl Form {
    pub fn item_count(&self) -> u32 {
        self.item_count
    }
}

/// `IppItem`: associates commands with a single form entry. Holds any number
/// of commands but at most one non-command child.
#[derive(Debug, Clone, Default)]
pub struct Item {
    pub(crate) has_item: bool,
    pub(crate) command_count: u32,
}

impl Item {
    pub fn command_count(&self) -> u32 {
        self.command_count
    }
}

/// `IppList`: selectable options laid out in 1 to 3 columns.
#[derive(Debug, Clone)]
pub struct List {
    pub list_type: ListType,
    pub columns: u8,
    pub(crate) options: u32,
}

impl List {
    pub fn option_count(&self) -> u32 {
        self.options
    }
}

/// `IppChoiceGroup`: an in-form group of selectable options.
#[derive(Debug, Clone)]
pub struct ChoiceGroup {
    pub choice_type: ChoiceType,
    pub(crate) options: u32,
}

impl ChoiceGroup {
    pub fn option_count(&self) -> u32 {
        self.options
    }
}

/// `Option`: one list or choice-group entry, carrying the key/value pair
/// reported to the server when selected.
#[derive(Debug, Clone)]
pub struct OptionEntry {
    pub selected: bool,
    pub key: String,
    pub value: String,
    pub(crate) texts: u32,
}

impl OptionEntry {
    /// Number of `OptionText` columns this entry carries.
    pub fn text_count(&self) -> u32 {
        self.texts
    }
}

/// `IppCommand`: a menu entry the user can invoke.
#[derive(Debug, Clone)]
pub struct Command {
    pub command_type: CommandType,
    /// Position on the command list; negative means unset.
    pub priority: i32,
    /// Auto-invoke after this many seconds; non-positive means never.
    pub auto: i32,
    pub key: Option<String>,
    pub value: Option<String>,
    pub display_on: DisplayOn,
    pub selected: bool,
    pub default: bool,
}

/// `IppAlert`: a transient message screen.
#[derive(Debug, Clone)]
pub struct Alert {
    pub alert_type: AlertType,
    /// Seconds until the alert dismisses itself; `None` renders as FOREVER.
    pub delay: Option<u32>,
}

/// Attributes shared by the editable-text kinds.
#[derive(Debug, Clone, Default)]
pub struct TextAttrs {
    /// Maximum input length; non-positive means unbounded.
    pub max_size: i32,
    pub password: bool,
    pub uneditable: bool,
}

/// `IppTextBox`: a full-screen text editor.
#[derive(Debug, Clone)]
pub struct TextBox {
    pub text_attrs: TextAttrs,
    pub constraint: BoxConstraint,
    pub default: BoxDefault,
    pub key: String,
}

/// `IppTextField`: a single editable line inside a form.
#[derive(Debug, Clone)]
pub struct TextField {
    pub text_attrs: TextAttrs,
    pub constraint: FieldConstraint,
    pub key: String,
}

/// `IppPlayer`: audio playback/recording screen. Part of the key-bearing
/// family: its `Key` attribute is emitted ahead of everything else.
#[derive(Debug, Clone)]
pub struct Player {
    pub key: String,
    pub mode: PlayerMode,
    pub state: PlayerState,
}

#[derive(Debug, Clone, Default)]
pub struct Spacer {
    pub new_line: Option<NewLine>,
}

/// `IppButton`: an image button reporting a key/value pair.
#[derive(Debug, Clone)]
pub struct Button {
    pub key: String,
    pub value: String,
}

/// `IppGauge`: a progress/volume bar.
#[derive(Debug, Clone)]
pub struct Gauge {
    pub interactive: Interactive,
    pub key: String,
}

/// `IppDateField`: date/time input inside a form.
#[derive(Debug, Clone)]
pub struct DateField {
    pub mode: DateMode,
    pub default: DateDefault,
    pub date_key: String,
    pub time_key: String,
}

/// `IppHidden`: a key/value pair submitted with the form but never shown.
#[derive(Debug, Clone)]
pub struct Hidden {
    pub hidden_type: HiddenType,
    pub key: String,
}

/// `IppKey`: keypad capture configuration for a screen.
#[derive(Debug, Clone)]
pub struct KeyGrab {
    pub keypad: bool,
    pub send_keys: bool,
    pub buffer_keys: BufferKeys,
    pub buffer_length: u32,
    pub term_key: Option<char>,
    pub url_key: String,
}

/// `IppAction`: something the phone does on its own (dial, hang up, LEDs).
#[derive(Debug, Clone)]
pub struct Action {
    pub action_type: ActionType,
}

/// `IppPhoneNumber`: renders a number from the phone book.
#[derive(Debug, Clone)]
pub struct PhoneNumber {
    pub image_type: ImageType,
    pub number_type: NumberType,
}

/// `Image`: a picture referenced by URL (carried as the node's contents).
#[derive(Debug, Clone, Default)]
pub struct Image {
    pub cache: String,
}

// =============================================================================
// Element
// =============================================================================

/// Every element kind of the vocabulary, with its typed attribute payload.
#[derive(Debug, Clone)]
pub enum Element {
    Phone,
    Display(Display),
    Screen(Screen),
    Form(Form),
    Item(Item),
    List(List),
    ChoiceGroup(ChoiceGroup),
    OptionEntry(OptionEntry),
    OptionText,
    Command(Command),
    Alert(Alert),
    TextBox(TextBox),
    Player(Player),
    TextField(TextField),
    StringItem,
    ImageItem,
    Spacer(Spacer),
    Button(Button),
    Gauge(Gauge),
    DateField(DateField),
    Hidden(Hidden),
    Key(KeyGrab),
    Action(Action),
    Ticker,
    PhoneNumber(PhoneNumber),
    Image(Image),
    /// A simple text leaf such as `Title` or `Label`.
    Leaf(String),
}

impl Element {
    /// The tag name this element serializes under.
    pub fn tag(&self) -> &str {
        match self {
            Element::Phone => "IppPhone",
            Element::Display(_) => "IppDisplay",
            Element::Screen(_) => "IppScreen",
            Element::Form(_) => "IppForm",
            Element::Item(_) => "IppItem",
            Element::List(_) => "IppList",
            Element::ChoiceGroup(_) => "IppChoiceGroup",
            Element::OptionEntry(_) => "Option",
            Element::OptionText => "OptionText",
            Element::Command(_) => "IppCommand",
            Element::Alert(_) => "IppAlert",
            Element::TextBox(_) => "IppTextBox",
            Element::Player(_) => "IppPlayer",
            Element::TextField(_) => "IppTextField",
            Element::StringItem => "IppStringItem",
            Element::ImageItem => "IppImageItem",
            Element::Spacer(_) => "IppSpacer",
            Element::Button(_) => "IppButton",
            Element::Gauge(_) => "IppGauge",
            Element::DateField(_) => "IppDateField",
            Element::Hidden(_) => "IppHidden",
            Element::Key(_) => "IppKey",
            Element::Action(_) => "IppAction",
            Element::Ticker => "IppTicker",
            Element::PhoneNumber(_) => "IppPhoneNumber",
            Element::Image(_) => "Image",
            Element::Leaf(tag) => tag,
        }
    }

    /// Whether this kind is one of the five content elements a screen holds
    /// exactly one of.
    pub fn is_screen_content(&self) -> bool {
        matches!(
            self,
            Element::Alert(_)
                | Element::List(_)
                | Element::TextBox(_)
                | Element::Player(_)
                | Element::Form(_)
        )
    }

    /// Whether this kind can be placed on a form (directly or wrapped in an
    /// `IppItem`).
    pub fn is_form_item(&self) -> bool {
        matches!(
            self,
            Element::StringItem
                | Element::ImageItem
                | Element::Spacer(_)
                | Element::TextField(_)
                | Element::ChoiceGroup(_)
                | Element::DateField(_)
                | Element::Button(_)
                | Element::Gauge(_)
        )
    }

    /// Attributes contributed by the key-bearing family, emitted before the
    /// element's own attributes.
    pub(crate) fn first_attributes(&self, out: &mut String) {
        if let Element::Player(p) = self {
            push_attr(out, "Key", &p.key);
        }
    }

    /// Render this element's own attributes, in the order the device
    /// documentation lists them. Values are written verbatim: the dialect
    /// performs no XML escaping, callers supply pre-sanitized text.
    pub(crate) fn attributes(&self, out: &mut String) {
        match self {
            Element::Display(d) => {
                if let Some(initial) = d.initial_screen {
                    push_attr(out, "InitialScreen", initial);
                }
                if d.update_screen > 0 {
                    push_attr(out, "UpdateScreen", d.update_screen);
                }
            }
            Element::Screen(s) => {
                if let Some(id) = s.id {
                    push_attr(out, "ID", id);
                }
                if s.hidden_count > 0 {
                    push_attr(out, "HiddenCount", s.hidden_count);
                }
                push_attr(out, "CommandCount", s.command_count);
            }
            Element::Form(f) => {
                push_attr(out, "ItemCount", f.item_count);
                if let Some(proportion) = f.proportion {
                    push_attr(out, "Proportion", proportion);
                }
            }
            Element::Item(i) => {
                push_attr(out, "CommandCount", i.command_count);
            }
            Element::List(l) => {
                push_attr(out, "Type", l.list_type);
                push_attr(out, "Count", l.options);
                push_attr(out, "Columns", l.columns);
            }
            Element::ChoiceGroup(g) => {
                push_attr(out, "Type", g.choice_type);
                push_attr(out, "Count", g.options);
            }
            Element::OptionEntry(o) => {
                if o.selected {
                    push_attr(out, "Selected", "TRUE");
                }
                let key = if o.key.is_empty() { "key" } else { o.key.as_str() };
                push_attr(out, "Key", key);
                push_attr(out, "Value", &o.value);
            }
            Element::Command(c) => {
                push_attr(out, "Type", c.command_type);
                if c.priority >= 0 {
                    push_attr(out, "Priority", c.priority);
                }
                if c.auto > 0 {
                    push_attr(out, "Auto", c.auto);
                }
                if matches!(c.command_type, CommandType::Select)
                    && (c.key.is_some() || c.value.is_some())
                {
                    push_attr(out, "Key", c.key.as_deref().unwrap_or("key"));
                    push_attr(out, "Value", c.value.as_deref().unwrap_or(""));
                }
                push_attr(out, "DisplayOn", c.display_on);
                if c.selected {
                    push_attr(out, "Select", "YES");
                }
                if c.default {
                    push_attr(out, "Default", "YES");
                }
            }
            Element::Alert(a) => {
                push_attr(out, "Type", a.alert_type);
                match a.delay {
                    Some(delay) => push_attr(out, "Delay", delay),
                    None => push_attr(out, "Delay", "FOREVER"),
                }
            }
            Element::TextBox(t) => {
                push_text_attrs(out, &t.text_attrs);
                push_attr(out, "Constraint", t.constraint);
                push_attr(out, "Default", t.default);
                push_attr(out, "Key", &t.key);
            }
            Element::TextField(t) => {
                push_text_attrs(out, &t.text_attrs);
                push_attr(out, "Constraint", t.constraint);
                push_attr(out, "Default", "TEXT");
                push_attr(out, "Key", &t.key);
            }
            Element::Player(p) => {
                push_attr(out, "Mode", p.mode);
                push_attr(out, "Default", p.state);
            }
            Element::Spacer(s) => {
                if let Some(new_line) = s.new_line {
                    push_attr(out, "NewLine", new_line);
                }
            }
            Element::Button(b) => {
                push_attr(out, "Type", "IMAGE");
                let key = if b.key.is_empty() { "key" } else { b.key.as_str() };
                push_attr(out, "Key", key);
                push_attr(out, "Value", &b.value);
            }
            Element::Gauge(g) => {
                push_attr(out, "Interactive", g.interactive);
                push_attr(out, "Key", &g.key);
            }
            Element::DateField(d) => {
                push_attr(out, "Mode", d.mode);
                push_attr(out, "Default", d.default);
                push_attr(out, "DateKey", &d.date_key);
                push_attr(out, "TimeKey", &d.time_key);
            }
            Element::Hidden(h) => {
                push_attr(out, "Type", h.hidden_type);
                push_attr(out, "Key", &h.key);
            }
            Element::Key(k) => {
                push_attr(out, "Keypad", k.keypad);
                push_attr(out, "SendKeys", k.send_keys);
                push_attr(out, "BufferKeys", k.buffer_keys);
                push_attr(out, "BufferLength", k.buffer_length);
                if let Some(term_key) = k.term_key {
                    push_attr(out, "TermKey", term_key);
                }
                push_attr(out, "UrlKey", &k.url_key);
            }
            Element::Action(a) => {
                push_attr(out, "Type", a.action_type);
            }
            Element::PhoneNumber(p) => {
                push_attr(out, "ImageType", p.image_type);
                push_attr(out, "NumberType", p.number_type);
            }
            Element::Image(i) => {
                if !i.cache.is_empty() {
                    push_attr(out, "Cache", &i.cache);
                }
            }
            Element::Phone
            | Element::OptionText
            | Element::StringItem
            | Element::ImageItem
            | Element::Ticker
            | Element::Leaf(_) => {}
        }
    }
}

fn push_attr(out: &mut String, name: &str, value: impl fmt::Display) {
    let _ = write!(out, " {name}=\"{value}\"");
}

fn push_text_attrs(out: &mut String, attrs: &TextAttrs) {
    if attrs.max_size > 0 {
        push_attr(out, "MaxSize", attrs.max_size);
    }
    if attrs.password {
        push_attr(out, "PASSWORD", "YES");
    }
    if attrs.uneditable {
        push_attr(out, "Uneditable", "YES");
    }
}

// =============================================================================
// Constructors
// =============================================================================

/// All fields of a command, for the rare cases the shorthand constructors
/// don't cover. Unset fields keep the device defaults.
#[derive(Debug, Clone)]
pub struct CommandConfig {
    pub label: String,
    pub command_type: CommandType,
    /// Target screen ID, used when the type is SCREEN.
    pub screen_id: i32,
    pub priority: i32,
    pub auto: i32,
    pub key: Option<String>,
    pub value: Option<String>,
    pub display_on: DisplayOn,
    pub selected: bool,
    pub default: bool,
}

impl Default for CommandConfig {
    fn default() -> Self {
        Self {
            label: String::new(),
            command_type: CommandType::Select,
            screen_id: -1,
            priority: -1,
            auto: 0,
            key: None,
            value: None,
            display_on: DisplayOn::Options,
            selected: false,
            default: false,
        }
    }
}

impl Document {
    /// The recommended root element. Holds one display.
    pub fn phone(&mut self) -> NodeId {
        self.node(Element::Phone)
    }

    /// A display holding up to five screens. `update_screen` is ignored when
    /// non-positive.
    pub fn display(&mut self, initial_screen: Option<i32>, update_screen: i32) -> NodeId {
        self.node(Element::Display(Display {
            initial_screen,
            update_screen,
        }))
    }

    /// A screen. Displays can hold up to five of these.
    pub fn screen(&mut self, id: Option<i32>) -> NodeId {
        self.node(Element::Screen(Screen {
            id,
            ..Screen::default()
        }))
    }

    /// An empty item wrapper. Usually created behind the scenes by
    /// [`Document::attach_command`].
    pub fn item(&mut self) -> NodeId {
        self.node(Element::Item(Item::default()))
    }

    /// A form posting its entries to `url`.
    pub fn form(&mut self, title: &str, url: &str, proportion: Option<Proportion>) -> NodeId {
        let id = self.node(Element::Form(Form {
            item_count: 0,
            proportion,
        }));
        self.leaf(id, "Title", title);
        self.leaf(id, "Url", url);
        id
    }

    /// A list with `columns` columns (1 to 3). Every option added later must
    /// carry exactly that many texts.
    pub fn list(
        &mut self,
        title: &str,
        url: &str,
        list_type: ListType,
        columns: u8,
    ) -> Result<NodeId, Error> {
        if !(1..=3).contains(&columns) {
            return Err(Error::InvalidArgument(
                "number of columns of IppList must be 1, 2 or 3".into(),
            ));
        }
        let id = self.node(Element::List(List {
            list_type,
            columns,
            options: 0,
        }));
        self.leaf(id, "Title", title);
        self.leaf(id, "Url", url);
        Ok(id)
    }

    /// A choice group inside a form.
    pub fn choice_group(&mut self, label: &str, choice_type: ChoiceType) -> NodeId {
        let id = self.node(Element::ChoiceGroup(ChoiceGroup {
            choice_type,
            options: 0,
        }));
        self.leaf(id, "Label", label);
        id
    }

    /// A list/choice-group option with up to three column texts and an
    /// optional [`Document::image`] child. An empty key falls back to
    /// `"key"` when rendered.
    pub fn option(
        &mut self,
        texts: &[&str],
        image: Option<NodeId>,
        selected: bool,
        key: &str,
        value: &str,
    ) -> Result<NodeId, Error> {
        if texts.len() > 3 {
            return Err(Error::StructuralConstraintViolation(
                "an Option cannot have more than 3 OptionTexts".into(),
            ));
        }
        if let Some(image) = image {
            self.expect_kind(image, |e| matches!(e, Element::Image(_)), "an Image node")?;
        }
        let id = self.node(Element::OptionEntry(OptionEntry {
            selected,
            key: key.into(),
            value: value.into(),
            texts: 0,
        }));
        for &text in texts {
            let option_text = self.option_text(text);
            self.attach(id, option_text)?;
        }
        if let Some(image) = image {
            self.append_node(id, image);
        }
        Ok(id)
    }

    /// One column text of an option.
    pub fn option_text(&mut self, text: &str) -> NodeId {
        self.node_with_text(Element::OptionText, text)
    }

    /// A column text rendering a phone-book entry instead of plain text.
    pub fn option_text_number(&mut self, phone_number: NodeId) -> Result<NodeId, Error> {
        self.expect_kind(
            phone_number,
            |e| matches!(e, Element::PhoneNumber(_)),
            "an IppPhoneNumber node",
        )?;
        let id = self.node(Element::OptionText);
        self.append_node(id, phone_number);
        Ok(id)
    }

    /// An EXIT, BACK or CANCEL command with its conventional label; other
    /// types need a label and go through the other constructors.
    pub fn command_preset(
        &mut self,
        command_type: CommandType,
        display_on: DisplayOn,
    ) -> Result<NodeId, Error> {
        let label = match command_type {
            CommandType::Exit => "Exit",
            CommandType::Back => "Back",
            CommandType::Cancel => "Cancel",
            _ => {
                return Err(Error::InvalidArgument(
                    "preset commands exist only for the EXIT, BACK and CANCEL types".into(),
                ));
            }
        };
        Ok(self.command_full(CommandConfig {
            label: label.into(),
            command_type,
            display_on,
            ..CommandConfig::default()
        }))
    }

    /// A SCREEN command switching to the screen with the given ID.
    pub fn command_screen(&mut self, label: &str, screen_id: i32, display_on: DisplayOn) -> NodeId {
        self.command_full(CommandConfig {
            label: label.into(),
            command_type: CommandType::Screen,
            screen_id,
            display_on,
            ..CommandConfig::default()
        })
    }

    /// A SELECT command submitting `key`/`value` to the server.
    pub fn command_select(
        &mut self,
        label: &str,
        key: &str,
        value: &str,
        display_on: DisplayOn,
    ) -> NodeId {
        self.command_full(CommandConfig {
            label: label.into(),
            command_type: CommandType::Select,
            key: Some(key.into()),
            value: Some(value.into()),
            display_on,
            ..CommandConfig::default()
        })
    }

    /// A command with every field under the caller's control.
    pub fn command_full(&mut self, config: CommandConfig) -> NodeId {
        let id = self.node(Element::Command(Command {
            command_type: config.command_type,
            priority: config.priority,
            auto: config.auto,
            key: config.key,
            value: config.value,
            display_on: config.display_on,
            selected: config.selected,
            default: config.default,
        }));
        self.leaf(id, "Label", config.label);
        if matches!(config.command_type, CommandType::Screen) {
            self.leaf(id, "ScreenID", config.screen_id);
        }
        id
    }

    /// An INFO alert shown until dismissed.
    pub fn alert(&mut self, title: &str, text: &str) -> NodeId {
        let id = self.node(Element::Alert(Alert {
            alert_type: AlertType::Info,
            delay: None,
        }));
        self.leaf(id, "Title", title);
        self.leaf(id, "Text", text);
        id
    }

    /// An alert with every field available, including an optional phone-book
    /// entry rendered inside the text and an optional image.
    #[allow(clippy::too_many_arguments)]
    pub fn alert_full(
        &mut self,
        title: &str,
        url: Option<&str>,
        text: &str,
        phone_number: Option<NodeId>,
        image: Option<NodeId>,
        alert_type: AlertType,
        delay: Option<u32>,
    ) -> Result<NodeId, Error> {
        if let Some(phone_number) = phone_number {
            self.expect_kind(
                phone_number,
                |e| matches!(e, Element::PhoneNumber(_)),
                "an IppPhoneNumber node",
            )?;
        }
        if let Some(image) = image {
            self.expect_kind(image, |e| matches!(e, Element::Image(_)), "an Image node")?;
        }
        let id = self.node(Element::Alert(Alert { alert_type, delay }));
        self.leaf(id, "Title", title);
        if let Some(url) = url {
            self.leaf(id, "Url", url);
        }
        let text_node = self.leaf(id, "Text", text);
        if let Some(phone_number) = phone_number {
            self.append_node(text_node, phone_number);
        }
        if let Some(image) = image {
            self.append_node(id, image);
        }
        Ok(id)
    }

    /// A plain text box with default constraints.
    pub fn text_box(&mut self, title: &str, text: &str, url: &str, key: &str) -> NodeId {
        self.text_box_full(
            Some(title),
            Some(text),
            Some(url),
            -1,
            BoxConstraint::Any,
            false,
            BoxDefault::Text,
            key,
            false,
        )
    }

    /// A text box with every field available. A TEXT default without any
    /// text degrades to NULL.
    #[allow(clippy::too_many_arguments)]
    pub fn text_box_full(
        &mut self,
        title: Option<&str>,
        text: Option<&str>,
        url: Option<&str>,
        max_size: i32,
        constraint: BoxConstraint,
        password: bool,
        default: BoxDefault,
        key: &str,
        uneditable: bool,
    ) -> NodeId {
        let default = if matches!(default, BoxDefault::Text) && text.is_none() {
            BoxDefault::Null
        } else {
            default
        };
        let id = self.node(Element::TextBox(TextBox {
            text_attrs: TextAttrs {
                max_size,
                password,
                uneditable,
            },
            constraint,
            default,
            key: key.into(),
        }));
        if let Some(title) = title {
            self.leaf(id, "Title", title);
        }
        if !matches!(default, BoxDefault::Null | BoxDefault::PhoneNumber)
            && let Some(text) = text
        {
            self.leaf(id, "Text", text);
        }
        if let Some(url) = url {
            self.leaf(id, "Url", url);
        }
        id
    }

    /// A single-line text field with default constraints.
    pub fn text_field(&mut self, label: &str, text: &str, key: &str) -> NodeId {
        self.text_field_full(label, text, -1, FieldConstraint::Any, false, key, false)
    }

    /// A masked text field for secrets.
    pub fn password_field(&mut self, label: &str, key: &str) -> NodeId {
        self.text_field_full(label, "", -1, FieldConstraint::Password, true, key, false)
    }

    /// A text field with every attribute available.
    pub fn text_field_full(
        &mut self,
        label: &str,
        text: &str,
        max_size: i32,
        constraint: FieldConstraint,
        password: bool,
        key: &str,
        uneditable: bool,
    ) -> NodeId {
        let id = self.node(Element::TextField(TextField {
            text_attrs: TextAttrs {
                max_size,
                password,
                uneditable,
            },
            constraint,
            key: key.into(),
        }));
        self.leaf(id, "Label", label);
        self.leaf(id, "Text", text);
        id
    }

    /// A static label/text pair inside a form.
    pub fn string_item(&mut self, label: &str, text: &str) -> NodeId {
        let id = self.node(Element::StringItem);
        self.leaf(id, "Label", label);
        self.leaf(id, "Text", text);
        id
    }

    /// A picture inside a form, with alternate text for devices that cannot
    /// show it.
    pub fn image_item(
        &mut self,
        label: &str,
        image: Option<NodeId>,
        alt_text: &str,
    ) -> Result<NodeId, Error> {
        if let Some(image) = image {
            self.expect_kind(image, |e| matches!(e, Element::Image(_)), "an Image node")?;
        }
        let id = self.node(Element::ImageItem);
        self.leaf(id, "Label", label);
        self.leaf(id, "AltText", alt_text);
        if let Some(image) = image {
            self.append_node(id, image);
        }
        Ok(id)
    }

    /// Vertical whitespace inside a form.
    pub fn spacer(&mut self, new_line: Option<NewLine>) -> NodeId {
        self.node(Element::Spacer(Spacer { new_line }))
    }

    /// An image button. An empty key falls back to `"key"` when rendered.
    pub fn button(
        &mut self,
        label: &str,
        image: Option<NodeId>,
        key: &str,
        value: &str,
    ) -> Result<NodeId, Error> {
        if let Some(image) = image {
            self.expect_kind(image, |e| matches!(e, Element::Image(_)), "an Image node")?;
        }
        let id = self.node(Element::Button(Button {
            key: key.into(),
            value: value.into(),
        }));
        self.leaf(id, "Label", label);
        if let Some(image) = image {
            self.append_node(id, image);
        }
        Ok(id)
    }

    /// A gauge. USER gauges report their position under `key`, which is
    /// therefore mandatory for them; AUTO gauges fall back to `"key"`.
    pub fn gauge(
        &mut self,
        label: &str,
        maximum: &str,
        initial: &str,
        interactive: Interactive,
        key: Option<&str>,
    ) -> Result<NodeId, Error> {
        let key = match (key, interactive) {
            (Some(key), _) => key.to_owned(),
            (None, Interactive::Auto) => "key".to_owned(),
            (None, Interactive::User) => {
                return Err(Error::InvalidArgument(
                    "'Key' attribute of IppGauge cannot be absent when 'Interactive' is USER"
                        .into(),
                ));
            }
        };
        let id = self.node(Element::Gauge(Gauge { interactive, key }));
        self.leaf(id, "Label", label);
        self.leaf(id, "Maximum", maximum);
        self.leaf(id, "Initial", initial);
        Ok(id)
    }

    /// An AUTO gauge counting minutes and seconds.
    pub fn gauge_timer(
        &mut self,
        label: &str,
        maximum_minutes: u32,
        maximum_seconds: u32,
        initial_minutes: u32,
        initial_seconds: u32,
    ) -> NodeId {
        let id = self.node(Element::Gauge(Gauge {
            interactive: Interactive::Auto,
            key: "key".into(),
        }));
        self.leaf(id, "Label", label);
        self.leaf(id, "Maximum", format!("{maximum_minutes}:{maximum_seconds}"));
        self.leaf(id, "Initial", format!("{initial_minutes}:{initial_seconds}"));
        id
    }

    /// A date/time input. `date` and `time` are preformatted strings;
    /// `time_zone` is the display name shown to the user.
    #[allow(clippy::too_many_arguments)]
    pub fn date_field(
        &mut self,
        label: &str,
        time_zone: &str,
        date: &str,
        time: &str,
        mode: DateMode,
        default: DateDefault,
        date_key: &str,
        time_key: &str,
    ) -> NodeId {
        let id = self.node(Element::DateField(DateField {
            mode,
            default,
            date_key: date_key.into(),
            time_key: time_key.into(),
        }));
        self.leaf(id, "Label", label);
        self.leaf(id, "TimeZone", time_zone);
        self.leaf(id, "Date", date);
        self.leaf(id, "Time", time);
        id
    }

    /// A hidden key/value pair. The key is mandatory, and VALUE-typed
    /// entries must carry a value.
    pub fn hidden(
        &mut self,
        hidden_type: HiddenType,
        key: &str,
        value: Option<&str>,
    ) -> Result<NodeId, Error> {
        if key.is_empty() {
            return Err(Error::InvalidArgument(
                "'Key' attribute of IppHidden must be defined".into(),
            ));
        }
        if value.is_none() && matches!(hidden_type, HiddenType::Value) {
            return Err(Error::InvalidArgument(
                "an IppHidden of type VALUE requires a value".into(),
            ));
        }
        let id = self.node(Element::Hidden(Hidden {
            hidden_type,
            key: key.into(),
        }));
        if let Some(value) = value {
            self.leaf(id, "Value", value);
        }
        Ok(id)
    }

    /// Keypad capture with everything switched off.
    pub fn key_default(&mut self) -> NodeId {
        self.key_config(false, false, BufferKeys::No, 0, None, None)
    }

    /// Keypad capture configuration. `url_key` defaults to `"digit"`.
    pub fn key_config(
        &mut self,
        keypad: bool,
        send_keys: bool,
        buffer_keys: BufferKeys,
        buffer_length: u32,
        term_key: Option<char>,
        url_key: Option<&str>,
    ) -> NodeId {
        self.node(Element::Key(KeyGrab {
            keypad,
            send_keys,
            buffer_keys,
            buffer_length,
            term_key,
            url_key: url_key.unwrap_or("digit").into(),
        }))
    }

    /// A phone-side action. MAKECALL needs the number to dial.
    pub fn action(
        &mut self,
        action_type: ActionType,
        number: Option<&str>,
    ) -> Result<NodeId, Error> {
        if matches!(action_type, ActionType::MakeCall) && number.is_none() {
            return Err(Error::InvalidArgument(
                "phone number must be given when IppAction is of type MAKECALL".into(),
            ));
        }
        let id = self.node(Element::Action(Action { action_type }));
        if matches!(action_type, ActionType::MakeCall)
            && let Some(number) = number
        {
            self.leaf(id, "Number", number);
        }
        Ok(id)
    }

    /// A scrolling line of text on the screen.
    pub fn ticker(&mut self, text: &str) -> NodeId {
        let id = self.node(Element::Ticker);
        self.leaf(id, "Text", text);
        id
    }

    /// A phone-book entry reference.
    pub fn phone_number(
        &mut self,
        alt_text: &str,
        image_type: ImageType,
        number_type: NumberType,
    ) -> NodeId {
        let id = self.node(Element::PhoneNumber(PhoneNumber {
            image_type,
            number_type,
        }));
        self.leaf(id, "AltText", alt_text);
        id
    }

    /// An image fetched from `source`; `cache` controls device-side caching
    /// and is omitted when empty.
    pub fn image(&mut self, cache: &str, source: &str) -> NodeId {
        self.node_with_text(Element::Image(Image { cache: cache.into() }), source)
    }

    /// A playback/recording screen wrapping an existing gauge node.
    pub fn player(
        &mut self,
        url: &str,
        mode: PlayerMode,
        state: PlayerState,
        key: &str,
        gauge: NodeId,
    ) -> Result<NodeId, Error> {
        let interactive = match &self.try_get(gauge)?.element {
            Element::Gauge(g) => g.interactive,
            _ => {
                return Err(Error::InvalidArgument(
                    "player expects an IppGauge node".into(),
                ));
            }
        };
        if matches!(mode, PlayerMode::Call) && matches!(state, PlayerState::Recording) {
            return Err(Error::InvalidArgument(
                "when IppPlayer is in CALL mode, it cannot be in RECORDING state".into(),
            ));
        }
        if matches!(interactive, Interactive::User) {
            if matches!(mode, PlayerMode::Call) && matches!(state, PlayerState::Playing) {
                return Err(Error::InvalidArgument(
                    "in CALL mode and PLAYING state, the IppGauge must be in AUTO mode".into(),
                ));
            }
            if matches!(mode, PlayerMode::Record)
                && matches!(state, PlayerState::Playing | PlayerState::Recording)
            {
                return Err(Error::InvalidArgument(
                    "in RECORD mode and PLAYING or RECORDING state, the IppGauge must be in AUTO mode"
                        .into(),
                ));
            }
        }
        let id = self.node(Element::Player(Player {
            key: key.into(),
            mode,
            state,
        }));
        self.leaf(id, "Url", url);
        self.append_node(id, gauge);
        Ok(id)
    }

    fn try_get(&self, id: NodeId) -> Result<&crate::dom::NodeData, Error> {
        self.check(id)?;
        Ok(self.get(id))
    }

    fn expect_kind(
        &self,
        id: NodeId,
        pred: impl Fn(&Element) -> bool,
        expected: &str,
    ) -> Result<(), Error> {
        if pred(&self.try_get(id)?.element) {
            Ok(())
        } else {
            Err(Error::InvalidArgument(format!(
                "expected {expected}, got an {}",
                self.get(id).element.tag()
            )))
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_proportion_labels() {
        assert_eq!(Proportion::L50R50.to_string(), "50_50");
        assert_eq!(Proportion::L0R100.to_string(), "0_100");
        assert_eq!(Proportion::L75R25.to_string(), "75_25");
    }

    #[test]
    fn test_enum_labels_match_wire_vocabulary() {
        assert_eq!(ListType::Implicit.to_string(), "IMPLICIT");
        assert_eq!(CommandType::Select.to_string(), "SELECT");
        assert_eq!(DisplayOn::ListItem.to_string(), "LISTITEM");
        assert_eq!(NewLine::BeforeAndAfter.to_string(), "NEWLINE_BEF_AFT");
        assert_eq!(ActionType::TurnLedOff.to_string(), "TURNLEDOFF");
        assert_eq!(BufferKeys::Subsequent.to_string(), "SUBSEQUENT");
    }

    #[test]
    fn test_option_key_falls_back_when_empty() {
        let option = Element::OptionEntry(OptionEntry {
            selected: false,
            key: String::new(),
            value: "v".into(),
            texts: 1,
        });
        let mut out = String::new();
        option.attributes(&mut out);
        assert_eq!(out, " Key=\"key\" Value=\"v\"");
    }

    #[test]
    fn test_command_select_emits_key_value_pair() {
        let command = Element::Command(Command {
            command_type: CommandType::Select,
            priority: -1,
            auto: 0,
            key: Some("action".into()),
            value: None,
            display_on: DisplayOn::Both,
            selected: false,
            default: false,
        });
        let mut out = String::new();
        command.attributes(&mut out);
        assert_eq!(
            out,
            " Type=\"SELECT\" Key=\"action\" Value=\"\" DisplayOn=\"BOTH\""
        );
    }

    #[test]
    fn test_back_command_omits_key_value_pair() {
        let command = Element::Command(Command {
            command_type: CommandType::Back,
            priority: -1,
            auto: 0,
            key: Some("ignored".into()),
            value: None,
            display_on: DisplayOn::Options,
            selected: false,
            default: false,
        });
        let mut out = String::new();
        command.attributes(&mut out);
        assert_eq!(out, " Type=\"BACK\" DisplayOn=\"OPTIONS\"");
    }

    #[test]
    fn test_alert_delay_forever() {
        let alert = Element::Alert(Alert {
            alert_type: AlertType::Warning,
            delay: None,
        });
        let mut out = String::new();
        alert.attributes(&mut out);
        assert_eq!(out, " Type=\"WARNING\" Delay=\"FOREVER\"");
    }

    #[test]
    fn test_player_key_renders_first() {
        let player = Element::Player(Player {
            key: "rec".into(),
            mode: PlayerMode::Record,
            state: PlayerState::Stopped,
        });
        let mut out = String::new();
        player.first_attributes(&mut out);
        player.attributes(&mut out);
        assert_eq!(out, " Key=\"rec\" Mode=\"RECORD\" Default=\"STOPPED\"");
    }

    #[test]
    fn test_gauge_requires_key_for_user_mode() {
        let mut doc = Document::new();
        assert!(matches!(
            doc.gauge("Volume", "10", "5", Interactive::User, None),
            Err(Error::InvalidArgument(_))
        ));
        let auto = doc
            .gauge("Progress", "10", "5", Interactive::Auto, None)
            .unwrap();
        match &doc.get(auto).element {
            Element::Gauge(g) => assert_eq!(g.key, "key"),
            other => panic!("expected gauge, got {other:?}"),
        }
    }

    #[test]
    fn test_hidden_value_type_requires_value() {
        let mut doc = Document::new();
        assert!(matches!(
            doc.hidden(HiddenType::Value, "k", None),
            Err(Error::InvalidArgument(_))
        ));
        assert!(doc.hidden(HiddenType::Value, "k", Some("v")).is_ok());
        assert!(matches!(
            doc.hidden(HiddenType::PhoneNumber, "", None),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_text_box_text_default_degrades_to_null() {
        let mut doc = Document::new();
        let text_box = doc.text_box_full(
            Some("T"),
            None,
            None,
            -1,
            BoxConstraint::Any,
            false,
            BoxDefault::Text,
            "k",
            false,
        );
        match &doc.get(text_box).element {
            Element::TextBox(t) => assert_eq!(t.default, BoxDefault::Null),
            other => panic!("expected text box, got {other:?}"),
        }
        // only the Title child; no Text child was materialized
        assert_eq!(doc.child_count(text_box), 1);
    }

    #[test]
    fn test_player_rejects_call_mode_recording_state() {
        let mut doc = Document::new();
        let gauge = doc.gauge_timer("g", 3, 0, 0, 0);
        assert!(matches!(
            doc.player(
                "http://x",
                PlayerMode::Call,
                PlayerState::Recording,
                "k",
                gauge
            ),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_player_rejects_user_gauge_while_playing() {
        let mut doc = Document::new();
        let gauge = doc
            .gauge("g", "10", "0", Interactive::User, Some("k"))
            .unwrap();
        assert!(matches!(
            doc.player(
                "http://x",
                PlayerMode::Call,
                PlayerState::Playing,
                "k",
                gauge
            ),
            Err(Error::InvalidArgument(_))
        ));
        let auto_gauge = doc.gauge_timer("g", 3, 0, 0, 0);
        assert!(
            doc.player(
                "http://x",
                PlayerMode::Call,
                PlayerState::Playing,
                "k",
                auto_gauge
            )
            .is_ok()
        );
    }

    #[test]
    fn test_action_makecall_requires_number() {
        let mut doc = Document::new();
        assert!(matches!(
            doc.action(ActionType::MakeCall, None),
            Err(Error::InvalidArgument(_))
        ));
        let call = doc.action(ActionType::MakeCall, Some("12345")).unwrap();
        assert_eq!(doc.child_count(call), 1);
        let led = doc.action(ActionType::TurnLedOn, None).unwrap();
        assert!(doc.is_empty(led));
    }
}

//! Item-wrapper promotion: commands attached to form items restructure the
//! tree transparently, and the restructured tree serializes the way the
//! device expects.

use ippml::{Document, DisplayOn, Element, Proportion};

#[test]
fn test_two_commands_share_one_wrapper() {
    let mut doc = Document::new();
    let field = doc.text_field("Name", "", "name");

    let first = doc.command_select("Send", "action", "send", DisplayOn::Both);
    let second = doc.command_select("Clear", "action", "clear", DisplayOn::Both);
    doc.attach_command(field, first).unwrap();
    doc.attach_command(field, second).unwrap();

    let wrapper = doc.logical_root(field);
    assert_ne!(wrapper, field);
    assert_eq!(doc.parent(field), Some(wrapper));
    assert_eq!(doc.parent(first), Some(wrapper));
    assert_eq!(doc.parent(second), Some(wrapper));
    // one field plus two commands, all under a single wrapper
    assert_eq!(doc.child_count(wrapper), 3);
    match doc.get(wrapper).element() {
        Element::Item(item) => assert_eq!(item.command_count(), 2),
        other => panic!("expected an item wrapper, got {other:?}"),
    }
}

#[test]
fn test_wrapper_takes_the_leaf_position_in_its_parent() {
    let mut doc = Document::new();
    let form = doc.form("F", "http://srv/app", None);
    let before = doc.string_item("before", "-");
    let field = doc.text_field("Name", "", "name");
    let after = doc.string_item("after", "-");
    doc.attach(form, before).unwrap();
    doc.attach(form, field).unwrap();
    doc.attach(form, after).unwrap();

    let command = doc.command_select("Send", "a", "b", DisplayOn::ListItem);
    doc.attach_command(field, command).unwrap();

    let children: Vec<_> = doc.children(form).collect();
    // Title, Url, then the three items with the wrapper replacing the field
    assert_eq!(children.len(), 5);
    assert_eq!(children[2], before);
    assert_eq!(children[3], doc.logical_root(field));
    assert_eq!(children[4], after);
}

#[test]
fn test_wrapped_item_attaches_to_a_form_through_its_wrapper() {
    let mut doc = Document::new();
    let form = doc.form("F", "http://srv/app", None);

    let field = doc.text_field("Name", "", "name");
    let command = doc.command_select("Send", "a", "b", DisplayOn::Both);
    doc.attach_command(field, command).unwrap();

    // attaching the field after promotion must land the wrapper, once
    let attached = doc.attach(form, field).unwrap();
    assert_eq!(attached, doc.logical_root(field));
    match doc.get(form).element() {
        Element::Form(f) => assert_eq!(f.item_count(), 1),
        other => panic!("expected a form, got {other:?}"),
    }
}

#[test]
fn test_full_document_round_trip() {
    let mut doc = Document::new();
    let phone = doc.phone();
    let display = doc.display(Some(1), -1);
    doc.attach(phone, display).unwrap();

    let screen_one = doc.screen(Some(1));
    doc.attach(display, screen_one).unwrap();
    let form_one = doc.form("Form One", "http://srv/app", Some(Proportion::L50R50));
    doc.attach(screen_one, form_one).unwrap();

    let screen_two = doc.screen(Some(2));
    doc.attach(display, screen_two).unwrap();
    let form_two = doc.form("Form Two", "http://srv/app", Some(Proportion::L50R50));
    doc.attach(screen_two, form_two).unwrap();

    // first form: a static item, then a field that gains a command after
    // it was already attached
    let greeting = doc.string_item("Greeting", "hello");
    doc.attach(form_one, greeting).unwrap();
    let name = doc.text_field("Name", "", "name");
    doc.attach(form_one, name).unwrap();
    let send = doc.command_select("Send", "action", "send", DisplayOn::Both);
    doc.attach_command(name, send).unwrap();

    // second form: the field is promoted before it reaches the form
    let code = doc.text_field("Code", "", "code");
    let ok = doc.command_select("OK", "action", "ok", DisplayOn::Both);
    doc.attach_command(code, ok).unwrap();
    doc.attach(form_two, code).unwrap();

    let expected = [
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>",
        "<IppPhone>",
        "\t<IppDisplay InitialScreen=\"1\">",
        "\t\t<IppScreen ID=\"1\" CommandCount=\"0\">",
        "\t\t\t<IppForm ItemCount=\"2\" Proportion=\"50_50\">",
        "\t\t\t\t<Title>Form One</Title>",
        "\t\t\t\t<Url>http://srv/app</Url>",
        "\t\t\t\t<IppStringItem>",
        "\t\t\t\t\t<Label>Greeting</Label>",
        "\t\t\t\t\t<Text>hello</Text>",
        "\t\t\t\t</IppStringItem>",
        "\t\t\t\t<IppItem CommandCount=\"1\">",
        "\t\t\t\t\t<IppTextField Constraint=\"ANY\" Default=\"TEXT\" Key=\"name\">",
        "\t\t\t\t\t\t<Label>Name</Label>",
        "\t\t\t\t\t\t<Text />",
        "\t\t\t\t\t</IppTextField>",
        "\t\t\t\t\t<IppCommand Type=\"SELECT\" Key=\"action\" Value=\"send\" DisplayOn=\"BOTH\">",
        "\t\t\t\t\t\t<Label>Send</Label>",
        "\t\t\t\t\t</IppCommand>",
        "\t\t\t\t</IppItem>",
        "\t\t\t</IppForm>",
        "\t\t</IppScreen>",
        "\t\t<IppScreen ID=\"2\" CommandCount=\"0\">",
        "\t\t\t<IppForm ItemCount=\"1\" Proportion=\"50_50\">",
        "\t\t\t\t<Title>Form Two</Title>",
        "\t\t\t\t<Url>http://srv/app</Url>",
        "\t\t\t\t<IppItem CommandCount=\"1\">",
        "\t\t\t\t\t<IppTextField Constraint=\"ANY\" Default=\"TEXT\" Key=\"code\">",
        "\t\t\t\t\t\t<Label>Code</Label>",
        "\t\t\t\t\t\t<Text />",
        "\t\t\t\t\t</IppTextField>",
        "\t\t\t\t\t<IppCommand Type=\"SELECT\" Key=\"action\" Value=\"ok\" DisplayOn=\"BOTH\">",
        "\t\t\t\t\t\t<Label>OK</Label>",
        "\t\t\t\t\t</IppCommand>",
        "\t\t\t\t</IppItem>",
        "\t\t\t</IppForm>",
        "\t\t</IppScreen>",
        "\t</IppDisplay>",
        "</IppPhone>",
    ]
    .join("\n")
        + "\n";

    let xml = doc.to_xml(phone).unwrap();
    assert_eq!(xml, expected);
}

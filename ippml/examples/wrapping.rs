//! Builds the two-screen demo application and prints the document: a form
//! per screen, with commands attached directly to form items so the item
//! wrappers appear on their own.

use ippml::{CommandType, DisplayOn, Document, Proportion};

fn main() {
    let mut doc = Document::new();
    let display = doc.display(Some(1), -1);

    let screen_one = doc.screen(Some(1));
    doc.attach(display, screen_one).unwrap();
    let form_one = doc.form("Form One", "http://localhost/app", Some(Proportion::L50R50));
    doc.attach(screen_one, form_one).unwrap();

    let screen_two = doc.screen(Some(2));
    doc.attach(display, screen_two).unwrap();
    let form_two = doc.form("Form Two", "http://localhost/app", None);
    doc.attach(screen_two, form_two).unwrap();

    // commands first, then the item goes onto the form already wrapped
    let text_item = doc.string_item("Text item", "text");
    for command_type in [CommandType::Cancel, CommandType::Back, CommandType::Exit] {
        let command = doc.command_preset(command_type, DisplayOn::Both).unwrap();
        doc.attach_command(text_item, command).unwrap();
    }
    doc.attach(form_one, text_item).unwrap();
    let spacer = doc.spacer(None);
    doc.attach(form_one, spacer).unwrap();
    let button = doc.button("label", None, "key", "").unwrap();
    doc.attach(form_one, button).unwrap();

    // the other way round: attach first, wrap on the first command
    let image_item = doc.image_item("Image item", None, "alt. text").unwrap();
    doc.attach(form_two, image_item).unwrap();
    let cancel = doc
        .command_preset(CommandType::Cancel, DisplayOn::Both)
        .unwrap();
    doc.attach_command(image_item, cancel).unwrap();
    let plain = doc.string_item("Text item", "example text");
    doc.attach(form_two, plain).unwrap();

    doc.send_to(display, &mut std::io::stdout()).unwrap();
}

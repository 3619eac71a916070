//! Assembles a push notification and prints the encoded body. Pass a phone
//! address on the command line to actually send it.

use ippml_push::{Push, RequestType};
use std::env;

fn main() {
    let push = Push::from_parts(
        "http",
        "192.168.1.10",
        8080,
        "/apps/directory",
        "Directory",
        RequestType::Active,
        "session",
        "42",
    )
    .expect("application address is valid");

    println!("POST body: {}", push.parameters().to_body());

    match env::args().nth(1) {
        Some(phone) => match push.push_to(&phone) {
            Ok(reply) => println!("phone replied: {reply}"),
            Err(err) => eprintln!("push failed: {err}"),
        },
        None => println!("no phone address given, not sending"),
    }
}

use ansi_term::{Colour, Style};
use std::fmt;
use std::io::{self, Write};

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

fn tagged(colour: Colour, icon: &str) -> String {
    Style::new().bold().fg(colour).paint(icon).to_string()
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{} {}", tagged(Colour::Blue, ICON_INFO), msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{} {}", tagged(Colour::Green, ICON_OK), msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{} {}", tagged(Colour::Yellow, ICON_WARN), msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{} {}", tagged(Colour::Red, ICON_ERR), msg);
}

/// Question without trailing newline; the answer is typed on the same line.
pub fn prompt<T: fmt::Display>(msg: T) {
    print!("{} ", Style::new().bold().paint(msg.to_string()));
    let _ = io::stdout().flush();
}

/// Dimmed read-only line (context fields, hints).
pub fn detail<T: fmt::Display>(msg: T) {
    println!("{}", Colour::Fixed(244).paint(msg.to_string()));
}

/// Colour used for an event name in confirmations.
pub fn color_for_event(event: &str) -> Colour {
    match event {
        "start" => Colour::Green,
        "stop" => Colour::Red,
        "note" => Colour::Cyan,
        _ => Colour::White,
    }
}

use crate::domain::ports::{NoticeLength, Notifier, Screen};

/// Toast analogue: transient notices on stderr.
#[derive(Debug, Default)]
pub struct ConsoleNotifier;

impl ConsoleNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, message: &str, length: NoticeLength) {
        let marker = match length {
            NoticeLength::Short => "🔔",
            NoticeLength::Long => "⚠️",
        };
        eprintln!("{} {}", marker, message);
    }
}

#[derive(Debug, Default)]
pub struct ConsoleScreen;

impl ConsoleScreen {
    pub fn new() -> Self {
        Self
    }
}

impl Screen for ConsoleScreen {
    fn show(&self, text: &str) {
        println!("{}", text);
    }
}

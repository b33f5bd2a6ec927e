use crate::message::Message;
use crate::partition::ClassificationResult;
use crate::settings::Theme;
use std::fmt::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Regular,
    Spam,
    Settings,
}

impl Screen {
    pub const ALL: [Screen; 3] = [Screen::Regular, Screen::Spam, Screen::Settings];

    pub fn title(self) -> &'static str {
        match self {
            Screen::Regular => "Regular Messages",
            Screen::Spam => "Spam Messages",
            Screen::Settings => "Settings",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "regular" | "ham" => Some(Screen::Regular),
            "spam" => Some(Screen::Spam),
            "settings" => Some(Screen::Settings),
            _ => None,
        }
    }
}

pub fn render_card(message: &Message, is_spam: bool, timestamp_format: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "┌ {}", message.sender);
    for line in message.content.lines() {
        let _ = writeln!(out, "│ {line}");
    }
    let _ = writeln!(out, "│ {}", message.formatted_timestamp(timestamp_format));
    if is_spam {
        let _ = writeln!(out, "│ [Spam]");
    }
    out.push('└');
    out.push('\n');
    out
}

pub fn render_screen(
    screen: Screen,
    result: &ClassificationResult,
    theme: Theme,
    timestamp_format: &str,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", screen.title());
    let _ = writeln!(out, "═══════════════════════════════════════");

    match screen {
        Screen::Regular => render_list(&mut out, &result.regular, false, timestamp_format),
        Screen::Spam => render_list(&mut out, &result.spam, true, timestamp_format),
        Screen::Settings => {
            let mode = if theme.is_dark() { "On" } else { "Off" };
            let _ = writeln!(out, "Dark Mode: {mode}");
            let _ = writeln!(out);
            let _ = writeln!(out, "About");
            let _ = writeln!(
                out,
                "SMS Filter sorts your messages into regular and spam by matching known spam keywords."
            );
            let _ = writeln!(out, "Version: {}", env!("CARGO_PKG_VERSION"));
        }
    }

    out
}

fn render_list(out: &mut String, messages: &[Message], is_spam: bool, timestamp_format: &str) {
    if messages.is_empty() {
        let _ = writeln!(out, "No messages");
        return;
    }
    for message in messages {
        out.push_str(&render_card(message, is_spam, timestamp_format));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FORMAT: &str = "%b %d, %Y %H:%M";

    #[test]
    fn test_spam_card_has_badge() {
        let message = Message::new("77123", "Free gift", 1_701_423_000_000);
        let card = render_card(&message, true, FORMAT);
        assert!(card.contains("77123"));
        assert!(card.contains("Free gift"));
        assert!(card.contains(&message.formatted_timestamp(FORMAT)));
        assert!(card.contains("[Spam]"));

        assert!(!render_card(&message, false, FORMAT).contains("[Spam]"));
    }

    #[test]
    fn test_empty_screen() {
        let out = render_screen(
            Screen::Spam,
            &ClassificationResult::default(),
            Theme::Light,
            FORMAT,
        );
        assert!(out.starts_with("Spam Messages"));
        assert!(out.contains("No messages"));
    }

    #[test]
    fn test_settings_screen_shows_theme() {
        let out = render_screen(
            Screen::Settings,
            &ClassificationResult::default(),
            Theme::Dark,
            FORMAT,
        );
        assert!(out.contains("Dark Mode: On"));
    }

    #[test]
    fn test_screen_names() {
        assert_eq!(Screen::from_name("SPAM"), Some(Screen::Spam));
        assert_eq!(Screen::from_name("ham"), Some(Screen::Regular));
        assert_eq!(Screen::from_name("inbox"), None);
    }
}

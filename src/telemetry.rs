//! Telemetry utilities for trigger tracing.

/// Standardized span constructors for bot observability.
pub mod spans {
    use tracing::{Span, info_span};

    /// Create a span for one inbound line.
    pub fn line(event: &str, nick: &str, sender: Option<&str>) -> Span {
        if let Some(sender) = sender {
            info_span!("line", event = %event, nick = %nick, sender = %sender)
        } else {
            info_span!("line", event = %event, nick = %nick)
        }
    }
}

/// Extract msgid from message tags if present.
pub fn extract_msgid(message: &lpbot_proto::PreTrigger) -> Option<&str> {
    message.tags().value("msgid")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_msgid() {
        let msg = lpbot_proto::PreTrigger::parse("bot", "@msgid=abc :n!u@h PRIVMSG #c :x").unwrap();
        assert_eq!(extract_msgid(&msg), Some("abc"));
        let msg = lpbot_proto::PreTrigger::parse("bot", ":n!u@h PRIVMSG #c :x").unwrap();
        assert_eq!(extract_msgid(&msg), None);
    }
}

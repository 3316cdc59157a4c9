//! Parsing behaviour for the lines a bot actually sees.
//!
//! Covers channel and private messages, tags, CTCP intents and the
//! degenerate lines that must not take the connection down.

use lpbot_proto::{Identifier, IntentKind, ParseError, PreTrigger, INTENT_TAG};

const BOT: &str = "BotNick";

fn parse(line: &str) -> PreTrigger {
    PreTrigger::parse(BOT, line).expect("line should parse")
}

// =============================================================================
// Prefix and target resolution
// =============================================================================

#[test]
fn test_channel_message() {
    let msg = parse(":nick!user@host PRIVMSG #chan :hello");
    assert_eq!(msg.nick().as_str(), "nick");
    assert_eq!(msg.user(), "user");
    assert_eq!(msg.host(), "host");
    assert_eq!(msg.hostmask(), Some("nick!user@host"));
    assert_eq!(msg.command(), "PRIVMSG");
    assert_eq!(msg.sender(), Some(&Identifier::new("#chan")));
    assert_eq!(msg.text(), "hello");
    assert_eq!(msg.params(), ["#chan", "hello"]);
}

#[test]
fn test_private_message_redirects_target() {
    let msg = parse(":nick!user@host PRIVMSG BotNick :hi");
    assert_eq!(msg.sender(), Some(&Identifier::new("nick")));
    assert_eq!(msg.sender().map(Identifier::as_str), Some("nick"));
}

#[test]
fn test_private_message_target_is_case_insensitive() {
    let msg = parse(":nick!user@host PRIVMSG botnick :hi");
    assert_eq!(msg.sender().map(Identifier::as_str), Some("nick"));

    let msg = PreTrigger::parse("Bot[1]", ":nick!user@host PRIVMSG bot{1} :hi").unwrap();
    assert_eq!(msg.sender().map(Identifier::as_str), Some("nick"));
}

#[test]
fn test_server_numeric() {
    let msg = parse(":irc.example.net 001 BotNick :Welcome to ExampleNet BotNick");
    assert_eq!(msg.command(), "001");
    assert_eq!(msg.nick().as_str(), "irc.example.net");
    assert_eq!(msg.user(), "");
    assert_eq!(msg.host(), "");
    // Addressed to the bot, so the reply target is the origin.
    assert_eq!(msg.sender().map(Identifier::as_str), Some("irc.example.net"));
}

#[test]
fn test_params_without_trailing() {
    let msg = parse(":op!o@h MODE #chan +o nick");
    assert_eq!(msg.params(), ["#chan", "+o", "nick"]);
    assert_eq!(msg.text(), "nick");
    assert_eq!(msg.sender().map(Identifier::as_str), Some("#chan"));
}

#[test]
fn test_join_with_trailing_channel() {
    let msg = parse(":nick!user@host JOIN :#chan");
    assert_eq!(msg.params(), ["#chan"]);
    assert_eq!(msg.sender().map(Identifier::as_str), Some("#chan"));
}

// =============================================================================
// Tags
// =============================================================================

#[test]
fn test_tags_without_prefix() {
    let msg = parse("@badge=1;vip PRIVMSG #chan :hey");
    assert_eq!(msg.tags().len(), 2);
    assert_eq!(msg.tags().get("badge"), Some(Some("1")));
    assert_eq!(msg.tags().get("vip"), Some(None));
    assert_eq!(msg.command(), "PRIVMSG");
    assert_eq!(msg.text(), "hey");
    assert!(msg.nick().is_empty());
    assert_eq!(msg.hostmask(), None);
}

#[test]
fn test_tags_with_prefix() {
    let msg = parse("@msgid=abc;time=2024-01-01T00:00:00Z :a!b@c PRIVMSG #x :y");
    assert_eq!(msg.tags().value("msgid"), Some("abc"));
    assert_eq!(msg.tags().value("time"), Some("2024-01-01T00:00:00Z"));
    assert_eq!(msg.nick().as_str(), "a");
}

#[test]
fn test_escaped_tag_value() {
    let msg = parse("@reason=gone\\sfishing\\:\\sback\\slater :a!b@c AWAY");
    assert_eq!(msg.tags().value("reason"), Some("gone fishing; back later"));
}

#[test]
fn test_malformed_tags_do_not_abort() {
    let msg = parse("@;=x;;ok PRIVMSG #chan :still here");
    assert_eq!(msg.tags().len(), 1);
    assert!(msg.tags().contains("ok"));
    assert_eq!(msg.text(), "still here");
}

// =============================================================================
// CTCP intents
// =============================================================================

#[test]
fn test_action_intent() {
    let msg = parse(":nick!user@host PRIVMSG #chan :\x01ACTION waves\x01");
    assert_eq!(msg.tags().value(INTENT_TAG), Some("ACTION"));
    assert_eq!(msg.intent(), Some(IntentKind::Action));
    assert_eq!(msg.text(), "waves");
    // The raw line keeps the delimiters.
    assert!(msg.line().contains('\x01'));
}

#[test]
fn test_intent_overrides_server_tag() {
    let msg = parse("@intent=old :nick!user@host PRIVMSG #chan :\x01ACTION dances\x01");
    assert_eq!(msg.tags().value(INTENT_TAG), Some("ACTION"));
}

#[test]
fn test_bare_ctcp_left_alone() {
    let msg = parse(":nick!user@host PRIVMSG BotNick :\x01VERSION\x01");
    assert_eq!(msg.intent(), None);
    assert_eq!(msg.text(), "\x01VERSION\x01");
}

#[test]
fn test_plain_message_has_no_intent() {
    let msg = parse(":nick!user@host PRIVMSG #chan :just text");
    assert!(!msg.tags().contains(INTENT_TAG));
    assert_eq!(msg.intent(), None);
}

// =============================================================================
// Degenerate lines
// =============================================================================

#[test]
fn test_bare_command() {
    let msg = parse("PING");
    assert_eq!(msg.command(), "PING");
    assert!(msg.params().is_empty());
    assert_eq!(msg.text(), "");
    assert_eq!(msg.sender(), None);
    assert!(msg.nick().is_empty());
    assert_eq!(msg.user(), "");
    assert_eq!(msg.host(), "");
}

#[test]
fn test_ping_with_token() {
    let msg = parse("PING :irc.example.net");
    assert_eq!(msg.params(), ["irc.example.net"]);
    assert_eq!(msg.text(), "irc.example.net");
}

#[test]
fn test_empty_trailing() {
    let msg = parse(":nick!user@host PRIVMSG #chan :");
    assert_eq!(msg.params(), ["#chan", ""]);
    assert_eq!(msg.text(), "");
}

#[test]
fn test_extra_spaces() {
    let msg = parse(":nick!user@host  PRIVMSG   #chan  :spaced  out");
    assert_eq!(msg.command(), "PRIVMSG");
    assert_eq!(msg.params(), ["#chan", "spaced  out"]);
}

#[test]
fn test_unusable_lines_are_errors() {
    assert_eq!(PreTrigger::parse(BOT, ""), Err(ParseError::EmptyMessage));
    assert_eq!(PreTrigger::parse(BOT, "\r\n"), Err(ParseError::EmptyMessage));
    assert!(matches!(
        PreTrigger::parse(BOT, "@tag=1 :nick!user@host"),
        Err(ParseError::MissingCommand { .. })
    ));
}

#[test]
fn test_never_panics_on_junk() {
    let junk = [
        "@", ":", "@ :", ": :", " :", "@=;= :=!@ X", "\x01", ":a!@ PRIVMSG", "PRIVMSG :\x01",
        ":n PRIVMSG #c :\x01\x01", "@k=\\ :n NOTICE", "ÄÖÜ :ß",
    ];
    for line in junk {
        let _ = PreTrigger::parse(BOT, line);
    }
}

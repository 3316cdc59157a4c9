//! Matched events handed to command handlers.
//!
//! A [`Trigger`] is a [`PreTrigger`] that matched one handler rule. It
//! carries everything the line carried plus the rule's capture groups and
//! two privilege flags computed once at construction.

use lpbot_proto::{Identifier, IntentKind, PreTrigger, Tags, INTENT_TAG};
use regex::Captures;

use crate::context::BotContext;

/// Capture groups of the rule match that produced a trigger.
///
/// Group 0 is the whole match. Rule shapes built by [`crate::rule::Rule`]
/// put the recognised command word in group 1 and its arguments in group
/// 2, and handlers index groups positionally.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchGroups {
    groups: Vec<Option<String>>,
}

impl MatchGroups {
    /// Snapshot a regex match.
    pub fn from_captures(captures: &Captures<'_>) -> Self {
        Self {
            groups: captures
                .iter()
                .map(|m| m.map(|m| m.as_str().to_string()))
                .collect(),
        }
    }

    /// Build from explicit groups, group 0 first.
    pub fn new<I>(groups: I) -> Self
    where
        I: IntoIterator<Item = Option<String>>,
    {
        Self {
            groups: groups.into_iter().collect(),
        }
    }

    /// A numbered group, or `None` if it did not participate or does not
    /// exist.
    pub fn group(&self, index: usize) -> Option<&str> {
        self.groups.get(index).and_then(|g| g.as_deref())
    }

    /// The whole match (group 0).
    pub fn whole(&self) -> &str {
        self.group(0).unwrap_or("")
    }

    /// Groups 1 and up.
    pub fn groups(&self) -> impl Iterator<Item = Option<&str>> {
        self.groups.iter().skip(1).map(|g| g.as_deref())
    }

    /// Number of groups, group 0 included.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether there are no groups at all.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl From<Captures<'_>> for MatchGroups {
    fn from(captures: Captures<'_>) -> Self {
        Self::from_captures(&captures)
    }
}

/// A line that matched a handler rule.
///
/// [`Trigger::text`] is the trailing parameter of the line with any CTCP
/// delimiters already stripped; the CTCP verb, if there was one, is in
/// the `intent` tag. [`Trigger::raw`] still has the delimiters.
#[derive(Debug, Clone)]
pub struct Trigger {
    text: String,
    raw: String,
    tags: Tags,
    hostmask: Option<String>,
    nick: Identifier,
    user: String,
    host: String,
    event: String,
    params: Vec<String>,
    sender: Option<Identifier>,
    matched: MatchGroups,
    is_privmsg: bool,
    admin: bool,
    owner: bool,
}

impl Trigger {
    /// Build a trigger for `message` matched by a rule.
    pub fn new(context: &BotContext, message: &PreTrigger, matched: MatchGroups) -> Self {
        let origin = message.origin();
        let sender = message.sender().cloned();
        let is_privmsg = sender.as_ref().is_some_and(|s| s == message.nick());

        let admin = context.admins().matches_sender(origin);
        let owner = context.owner().is_some_and(|p| p.matches_sender(origin));

        Self {
            text: message.text().to_string(),
            raw: message.line().to_string(),
            tags: message.tags().clone(),
            hostmask: message.hostmask().map(str::to_string),
            nick: origin.nick.clone(),
            user: origin.user.clone(),
            host: origin.host.clone(),
            event: message.command().to_string(),
            params: message.params().to_vec(),
            sender,
            matched,
            is_privmsg,
            admin,
            owner,
        }
    }

    /// The matched text: the line's trailing parameter.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The entire line as sent by the server, CTCP delimiters included.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// IRCv3 tags, including any lifted `intent`.
    pub fn tags(&self) -> &Tags {
        &self.tags
    }

    /// The CTCP verb the text was wrapped in, if any.
    pub fn intent(&self) -> Option<IntentKind> {
        self.tags.value(INTENT_TAG).map(IntentKind::parse)
    }

    /// `nick!user@host` of the sender, if the line had a prefix.
    pub fn hostmask(&self) -> Option<&str> {
        self.hostmask.as_deref()
    }

    /// Nickname of the sender.
    pub fn nick(&self) -> &Identifier {
        &self.nick
    }

    /// Local username of the sender.
    pub fn user(&self) -> &str {
        &self.user
    }

    /// Hostname of the sender.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// The IRC event (`PRIVMSG`, `MODE`, ...) that triggered the rule.
    pub fn event(&self) -> &str {
        &self.event
    }

    /// Parameters after the event verb. Setting `mode -m` on `#example`
    /// gives `["#example", "-m"]`.
    pub fn params(&self) -> &[String] {
        &self.params
    }

    /// Where replies go: the channel, or the sender's nick for private
    /// messages.
    pub fn sender(&self) -> Option<&Identifier> {
        self.sender.as_ref()
    }

    /// The rule match.
    pub fn matched(&self) -> &MatchGroups {
        &self.matched
    }

    /// Shorthand for `self.matched().group(index)`.
    pub fn group(&self, index: usize) -> Option<&str> {
        self.matched.group(index)
    }

    /// Shorthand for `self.matched().groups()`.
    pub fn groups(&self) -> impl Iterator<Item = Option<&str>> {
        self.matched.groups()
    }

    /// True if the message was sent to the bot directly, not to a channel.
    pub fn is_privmsg(&self) -> bool {
        self.is_privmsg
    }

    /// True if the sender matches one of the configured admin patterns.
    pub fn admin(&self) -> bool {
        self.admin
    }

    /// True if the sender matches the configured owner.
    pub fn owner(&self) -> bool {
        self.owner
    }
}

//! Tokenizing one raw line into a [`PreTrigger`].
//!
//! The wire shape is
//!
//! ```text
//! [@tags SPACE] [:prefix SPACE] COMMAND [params...] [SPACE :trailing]
//! ```
//!
//! Parsing is deliberately forgiving. Servers and bouncers emit plenty of
//! lines that stretch the grammar and a long-lived connection must survive
//! all of them, so the only lines rejected are ones with no command verb.

use crate::error::{ParseError, Result};
use crate::identifier::Identifier;
use crate::intent::{self, IntentKind};
use crate::prefix::Sender;
use crate::tags::{Tags, INTENT_TAG};

/// A parsed line that has not been matched against any handler rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreTrigger {
    line: String,
    tags: Tags,
    hostmask: Option<String>,
    sender: Sender,
    command: String,
    params: Vec<String>,
    target: Option<Identifier>,
}

impl PreTrigger {
    /// Parse `line` as received by a bot whose nickname is `own_nick`.
    ///
    /// Trailing CR/LF is stripped. The bot's nickname decides whether a
    /// message was addressed to a channel or directly to the bot; see
    /// [`PreTrigger::sender`].
    ///
    /// ```
    /// use lpbot_proto::PreTrigger;
    ///
    /// let msg = PreTrigger::parse("lpbot", ":nick!user@host PRIVMSG #chan :hello").unwrap();
    /// assert_eq!(msg.command(), "PRIVMSG");
    /// assert_eq!(msg.nick().as_str(), "nick");
    /// assert_eq!(msg.sender().map(|s| s.as_str()), Some("#chan"));
    /// assert_eq!(msg.text(), "hello");
    /// ```
    pub fn parse(own_nick: &str, line: &str) -> Result<Self> {
        let line = line.trim_end_matches(['\r', '\n']);
        if line.is_empty() {
            return Err(ParseError::EmptyMessage);
        }

        let mut rest = line;

        let tags = match rest.strip_prefix('@') {
            Some(tagged) => {
                let (segment, after) = tagged.split_once(' ').unwrap_or((tagged, ""));
                rest = after.trim_start_matches(' ');
                Tags::parse(segment)
            }
            None => Tags::new(),
        };

        let hostmask = match rest.strip_prefix(':') {
            Some(prefixed) => {
                let (prefix, after) = prefixed.split_once(' ').unwrap_or((prefixed, ""));
                rest = after.trim_start_matches(' ');
                Some(prefix.to_owned()).filter(|p| !p.is_empty())
            }
            None => None,
        };

        let mut params = split_params(rest);
        if !matches!(params.first(), Some(command) if !command.is_empty()) {
            return Err(ParseError::MissingCommand {
                line: line.to_owned(),
            });
        }
        let command = params.remove(0);

        let sender = Sender::parse(hostmask.as_deref().unwrap_or(""));
        let target = resolve_target(own_nick, &sender.nick, params.first());

        let mut message = Self {
            line: line.to_owned(),
            tags,
            hostmask,
            sender,
            command,
            params,
            target,
        };
        message.lift_intent();
        Ok(message)
    }

    /// Move a CTCP verb from the trailing text into the `intent` tag.
    fn lift_intent(&mut self) {
        if !intent::carries_ctcp(&self.command) {
            return;
        }
        let Some(last) = self.params.last_mut() else {
            return;
        };
        if let Some((verb, text)) = intent::extract(last) {
            let (verb, text) = (verb.to_owned(), text.to_owned());
            self.tags.insert(INTENT_TAG, Some(verb));
            *last = text;
        }
    }

    /// The full line as received, CTCP delimiters included.
    pub fn line(&self) -> &str {
        &self.line
    }

    /// Message tags, including any lifted `intent`.
    pub fn tags(&self) -> &Tags {
        &self.tags
    }

    /// The raw `nick!user@host` prefix, if the line had one.
    pub fn hostmask(&self) -> Option<&str> {
        self.hostmask.as_deref()
    }

    /// The decomposed prefix.
    pub fn origin(&self) -> &Sender {
        &self.sender
    }

    /// Nickname of the sender; empty for prefix-less lines.
    pub fn nick(&self) -> &Identifier {
        &self.sender.nick
    }

    /// Username of the sender; empty when absent.
    pub fn user(&self) -> &str {
        &self.sender.user
    }

    /// Host of the sender; empty when absent.
    pub fn host(&self) -> &str {
        &self.sender.host
    }

    /// The command verb (`PRIVMSG`, `JOIN`, `001`, ...).
    pub fn command(&self) -> &str {
        &self.command
    }

    /// Parameters after the command verb, trailing text last.
    pub fn params(&self) -> &[String] {
        &self.params
    }

    /// The last parameter, or `""` when the command had none.
    pub fn text(&self) -> &str {
        self.params.last().map(String::as_str).unwrap_or("")
    }

    /// Where replies should go.
    ///
    /// This is the first parameter (usually a channel), except when that
    /// parameter is the bot's own nickname: then the message was private
    /// and the sender's nickname is returned instead. `None` when the
    /// command had no parameters.
    pub fn sender(&self) -> Option<&Identifier> {
        self.target.as_ref()
    }

    /// The lifted CTCP verb, if any.
    pub fn intent(&self) -> Option<IntentKind> {
        self.tags.value(INTENT_TAG).map(IntentKind::parse)
    }
}

impl std::str::FromStr for PreTrigger {
    type Err = ParseError;

    /// Parse without knowing the bot's nickname; every target is taken
    /// at face value.
    fn from_str(s: &str) -> Result<Self> {
        Self::parse("", s)
    }
}

/// Split the parameter section, honouring a ` :` trailing parameter.
fn split_params(rest: &str) -> Vec<String> {
    let (middle, trailing) = match rest.split_once(" :") {
        Some((middle, trailing)) => (middle, Some(trailing)),
        None => (rest, None),
    };

    let mut params: Vec<String> = middle
        .split(' ')
        .filter(|p| !p.is_empty())
        .map(str::to_owned)
        .collect();
    if let Some(trailing) = trailing {
        params.push(trailing.to_owned());
    }
    params
}

fn resolve_target(
    own_nick: &str,
    nick: &Identifier,
    first_param: Option<&String>,
) -> Option<Identifier> {
    let target = Identifier::new(first_param?.as_str());
    if !own_nick.is_empty() && target == own_nick {
        return Some(nick.clone());
    }
    Some(target)
}

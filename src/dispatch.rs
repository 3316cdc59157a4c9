//! Turning a parsed line into the triggers for every rule it matches.

use lpbot_proto::PreTrigger;
use tracing::debug;

use crate::context::BotContext;
use crate::rule::Rule;
use crate::telemetry::{self, spans};
use crate::trigger::Trigger;

/// Match `message` against `rules` in order and build one [`Trigger`] per
/// matching rule.
///
/// Pure apart from logging: nothing shared is mutated, so any number of
/// callers may dispatch concurrently against the same context and rules.
pub fn dispatch<'r>(
    context: &BotContext,
    message: &PreTrigger,
    rules: &'r [Rule],
) -> Vec<(&'r Rule, Trigger)> {
    let span = spans::line(
        message.command(),
        message.nick().as_str(),
        message.sender().map(|s| s.as_str()),
    );
    let _enter = span.enter();

    rules
        .iter()
        .filter_map(|rule| {
            let matched = rule.matches(message)?;
            let trigger = Trigger::new(context, message, matched);
            debug!(
                rule = %rule.name(),
                admin = trigger.admin(),
                privmsg = trigger.is_privmsg(),
                msgid = ?telemetry::extract_msgid(message),
                "Rule matched"
            );
            Some((rule, trigger))
        })
        .collect()
}

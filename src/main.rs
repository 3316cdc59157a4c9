//! lpbot - replay raw IRC lines through the trigger pipeline.
//!
//! Reads one server line per stdin line, parses it as the configured bot
//! would, and logs every rule that fires. Useful for checking admin
//! patterns and command rules against captured traffic.

use lpbot::{BotContext, Config, Rule, dispatch};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true);
    if std::env::var_os("LPBOT_LOG_JSON").is_some() {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    // Load configuration
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config.toml".to_string());

    let config = Config::load(&config_path).map_err(|e| {
        error!(path = %config_path, error = %e, "Failed to load config");
        e
    })?;

    let context = BotContext::from_config(&config.core)?;
    let rules = config
        .rules
        .iter()
        .map(|r| Rule::from_config(r, &config.core.nick, &config.core.prefix))
        .collect::<Result<Vec<_>, _>>()?;

    info!(
        nick = %context.nick(),
        rules = rules.len(),
        "Starting lpbot replay"
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let (mut parsed, mut fired) = (0usize, 0usize);
    while let Some(line) = lines.next_line().await? {
        let message = match context.parse(&line) {
            Ok(message) => message,
            Err(e) => {
                warn!(error = %e, code = e.error_code(), "Dropping unparseable line");
                continue;
            }
        };
        parsed += 1;

        for (rule, trigger) in dispatch(&context, &message, &rules) {
            fired += 1;
            info!(
                rule = %rule.name(),
                nick = %trigger.nick(),
                sender = %trigger.sender().map(|s| s.as_str()).unwrap_or(""),
                admin = trigger.admin(),
                owner = trigger.owner(),
                privmsg = trigger.is_privmsg(),
                intent = %trigger.intent().map(|i| i.to_string()).unwrap_or_default(),
                text = %trigger.text(),
                "Trigger"
            );
        }
    }

    info!(parsed, fired, "Replay finished");
    Ok(())
}

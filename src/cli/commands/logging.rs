use clap::{builder::ValueParser, Arg, Command};
use tracing::Level;

pub const ARG_VERBOSITY: &str = "verbosity";

/// Default filter level, indexed by the number of `-v` flags.
pub const LEVELS: [Level; 5] = [
    Level::ERROR,
    Level::WARN,
    Level::INFO,
    Level::DEBUG,
    Level::TRACE,
];

/// Level for a verbosity count; counts past the table saturate at `TRACE`.
#[must_use]
pub fn level_for(verbosity: u8) -> Level {
    LEVELS[usize::from(verbosity).min(LEVELS.len() - 1)]
}

/// Accepts `WINDOWFIX_LOG_LEVEL` as a level name or a count in `0..=5`.
#[must_use]
pub fn validator_log_level() -> ValueParser {
    ValueParser::from(move |level: &str| -> std::result::Result<u8, String> {
        let level = level.trim();
        if let Ok(count) = level.parse::<u8>() {
            return if count <= 5 {
                Ok(count)
            } else {
                Err(format!("log level count out of range: {count}"))
            };
        }

        LEVELS
            .iter()
            .position(|known| known.as_str().eq_ignore_ascii_case(level))
            .and_then(|index| u8::try_from(index).ok())
            .ok_or_else(|| format!("invalid log level: {level}"))
    })
}

#[must_use]
pub fn with_args(command: Command) -> Command {
    command.arg(
        Arg::new(ARG_VERBOSITY)
            .short('v')
            .long("verbose")
            .help("Raise log verbosity: -v WARN, -vv INFO, -vvv DEBUG, -vvvv TRACE (default: ERROR)")
            .env("WINDOWFIX_LOG_LEVEL")
            .global(true)
            .action(clap::ArgAction::Count)
            .value_parser(validator_log_level()),
    )
}

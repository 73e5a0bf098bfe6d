pub mod logging;

use clap::{
    builder::styling::{AnsiColor, Effects, Styles},
    Arg, ColorChoice, Command,
};

pub const ARG_PORT: &str = "port";
pub const ARG_DIST: &str = "dist";

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let long_version: &'static str = Box::leak(
        format!("{} - {}", env!("CARGO_PKG_VERSION"), crate::GIT_COMMIT_HASH).into_boxed_str(),
    );

    let command = Command::new("windowfix")
        .about("WindowFix Pro static site server")
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version)
        .color(ColorChoice::Auto)
        .styles(styles)
        .arg(
            Arg::new(ARG_PORT)
                .short('p')
                .long("port")
                .help("Port to listen on")
                .default_value("8080")
                .env("WINDOWFIX_PORT")
                .value_parser(clap::value_parser!(u16)),
        )
        .arg(
            Arg::new(ARG_DIST)
                .short('d')
                .long("dist")
                .help("Directory holding the compiled web bundle")
                .long_help(
                    "Directory holding the compiled web bundle (the output of `trunk build`). Unknown paths fall back to its index.html.",
                )
                .default_value("apps/web/dist")
                .env("WINDOWFIX_DIST"),
        );

    logging::with_args(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let command = new();

        assert_eq!(command.get_name(), "windowfix");
        assert_eq!(
            command.get_about().map(ToString::to_string),
            Some("WindowFix Pro static site server".to_string())
        );
        assert_eq!(
            command.get_version().map(ToString::to_string),
            Some(env!("CARGO_PKG_VERSION").to_string())
        );
    }

    #[test]
    fn test_check_port_and_dist() {
        temp_env::with_vars(
            [
                ("WINDOWFIX_PORT", None::<&str>),
                ("WINDOWFIX_DIST", None::<&str>),
            ],
            || {
                let command = new();
                let matches =
                    command.get_matches_from(vec!["windowfix", "--port", "9090", "--dist", "/srv/www"]);

                assert_eq!(matches.get_one::<u16>(ARG_PORT).copied(), Some(9090));
                assert_eq!(
                    matches.get_one::<String>(ARG_DIST).cloned(),
                    Some("/srv/www".to_string())
                );
            },
        );
    }

    #[test]
    fn test_defaults() {
        temp_env::with_vars(
            [
                ("WINDOWFIX_PORT", None::<&str>),
                ("WINDOWFIX_DIST", None::<&str>),
                ("WINDOWFIX_LOG_LEVEL", None::<&str>),
            ],
            || {
                let matches = new().get_matches_from(vec!["windowfix"]);
                assert_eq!(matches.get_one::<u16>(ARG_PORT).copied(), Some(8080));
                assert_eq!(
                    matches.get_one::<String>(ARG_DIST).cloned(),
                    Some("apps/web/dist".to_string())
                );
                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    Some(0)
                );
            },
        );
    }

    #[test]
    fn test_check_env() {
        temp_env::with_vars(
            [
                ("WINDOWFIX_PORT", Some("443")),
                ("WINDOWFIX_DIST", Some("/var/www/windowfix")),
                ("WINDOWFIX_LOG_LEVEL", Some("info")),
            ],
            || {
                let matches = new().get_matches_from(vec!["windowfix"]);
                assert_eq!(matches.get_one::<u16>(ARG_PORT).copied(), Some(443));
                assert_eq!(
                    matches.get_one::<String>(ARG_DIST).cloned(),
                    Some("/var/www/windowfix".to_string())
                );
                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    Some(2)
                );
            },
        );
    }

    #[test]
    fn test_check_log_level_env() {
        let levels = ["error", "warn", "info", "debug", "trace"];
        for (index, &level) in levels.iter().enumerate() {
            temp_env::with_vars([("WINDOWFIX_LOG_LEVEL", Some(level))], || {
                let matches = new().get_matches_from(vec!["windowfix"]);
                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    u8::try_from(index).ok()
                );
            });
        }
    }

    #[test]
    fn test_check_log_level_verbosity() {
        for index in 0..5_usize {
            temp_env::with_vars([("WINDOWFIX_LOG_LEVEL", None::<String>)], || {
                let mut args = vec!["windowfix".to_string()];

                // Add the appropriate number of "-v" flags based on the index
                if index > 0 {
                    args.push(format!("-{}", "v".repeat(index)));
                }

                let matches = new().get_matches_from(args);

                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    u8::try_from(index).ok()
                );
            });
        }
    }
}

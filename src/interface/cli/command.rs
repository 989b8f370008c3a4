//! CLI 명령 파싱 모듈.

use clap::Parser;

use crate::application::config::ConfigOverrides;

#[derive(Debug, Parser)]
#[command(name = "photo-album")]
#[command(about = "List photos and photo albums from a JSON photo API")]
pub struct Cli {
    /// Photo API base URL (overrides config)
    #[arg(long, value_name = "URL")]
    api_base: Option<String>,

    /// Request timeout in milliseconds (overrides config)
    #[arg(long, value_name = "MS", value_parser = clap::value_parser!(u64).range(1..))]
    timeout_ms: Option<u64>,

    /// Command to run once, e.g. `photo-album 3`. Omit for the interactive shell.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "COMMAND")]
    command: Vec<String>,
}

#[derive(Debug, PartialEq, Eq)]
pub enum CliAction {
    Interactive,
    RunOnce(Vec<String>),
}

/// 실행 모드와 설정 덮어쓰기 값.
#[derive(Debug)]
pub struct Invocation {
    pub action: CliAction,
    pub overrides: ConfigOverrides,
}

impl Cli {
    pub fn parse_invocation() -> Invocation {
        Cli::parse().into_invocation()
    }

    fn into_invocation(self) -> Invocation {
        let action = if self.command.is_empty() {
            CliAction::Interactive
        } else {
            CliAction::RunOnce(self.command)
        };

        Invocation {
            action,
            overrides: ConfigOverrides {
                api_base: self.api_base,
                timeout_ms: self.timeout_ms,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invocation(args: &[&str]) -> Invocation {
        let argv = std::iter::once("photo-album").chain(args.iter().copied());
        Cli::try_parse_from(argv).unwrap().into_invocation()
    }

    #[test]
    fn no_arguments_is_interactive() {
        let inv = invocation(&[]);

        assert_eq!(inv.action, CliAction::Interactive);
        assert_eq!(inv.overrides, ConfigOverrides::default());
    }

    #[test]
    fn command_words_are_forwarded() {
        assert_eq!(
            invocation(&["photo-album", "3"]).action,
            CliAction::RunOnce(vec!["photo-album".to_string(), "3".to_string()])
        );
        assert_eq!(
            invocation(&["help"]).action,
            CliAction::RunOnce(vec!["help".to_string()])
        );
    }

    #[test]
    fn negative_album_argument_reaches_the_parser() {
        assert_eq!(
            invocation(&["photo-album", "-1"]).action,
            CliAction::RunOnce(vec!["photo-album".to_string(), "-1".to_string()])
        );
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let argv = ["photo-album", "--timeout-ms", "0", "photo-album"];

        assert!(Cli::try_parse_from(argv).is_err());
    }

    #[test]
    fn options_before_command_are_overrides() {
        let inv = invocation(&[
            "--api-base",
            "http://localhost:3000",
            "--timeout-ms",
            "250",
            "photo-album",
        ]);

        assert_eq!(inv.action, CliAction::RunOnce(vec!["photo-album".to_string()]));
        assert_eq!(
            inv.overrides,
            ConfigOverrides {
                api_base: Some("http://localhost:3000".to_string()),
                timeout_ms: Some(250),
            }
        );
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Args {
    pub base_url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Run(Args),
    Help,
    Version,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseError {
    pub code: i32,
    pub message: String,
}

#[must_use]
pub fn help_text(bin_name: &str) -> String {
    format!(
        "Stonks Terminal\n\nUsage:\n  {bin_name} [options]\n\nOptions:\n  -h, --help            show this help\n  -V, --version         show version information\n      --base-url <url>  exchange API base URL (overrides STONKS_BASE_URL)\n"
    )
}

#[must_use]
pub fn version_text() -> String {
    format!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

pub fn parse_args<I, S>(args: I) -> Result<Command, ParseError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut parsed = Args::default();
    let mut show_help = false;
    let mut show_version = false;

    let mut iter = args.into_iter().map(Into::into);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => show_help = true,
            "-V" | "--version" => show_version = true,
            "--base-url" => {
                let Some(value) = iter.next() else {
                    return Err(ParseError {
                        code: 2,
                        message: format!("--base-url expects a value\n\n{}", help_text("stonks")),
                    });
                };
                parsed.base_url = Some(value);
            }
            _ if arg.starts_with('-') => {
                return Err(ParseError {
                    code: 2,
                    message: format!("unknown option: {arg}\n\n{}", help_text("stonks")),
                });
            }
            _ => {
                return Err(ParseError {
                    code: 2,
                    message: format!("unexpected argument: {arg}\n\n{}", help_text("stonks")),
                });
            }
        }
    }

    if show_help {
        return Ok(Command::Help);
    }

    if show_version {
        return Ok(Command::Version);
    }

    Ok(Command::Run(parsed))
}

#[cfg(test)]
mod tests {
    use super::{parse_args, Command};

    #[test]
    fn parses_default_run_command() {
        let result = parse_args(Vec::<String>::new());
        assert!(matches!(result, Ok(Command::Run(_))));
    }

    #[test]
    fn parses_help_command() {
        let result = parse_args(["--help"]);
        assert_eq!(result, Ok(Command::Help));
    }

    #[test]
    fn parses_version_command() {
        let result = parse_args(["--version"]);
        assert_eq!(result, Ok(Command::Version));
    }

    #[test]
    fn parses_base_url_with_value() {
        let result = parse_args(["--base-url", "http://localhost:4567"]);
        match result {
            Ok(Command::Run(args)) => {
                assert_eq!(args.base_url.as_deref(), Some("http://localhost:4567"));
            }
            _ => panic!("expected run command with base url"),
        }
    }

    #[test]
    fn fails_on_base_url_without_value() {
        let result = parse_args(["--base-url"]);
        let err = result.expect_err("expected parse error");
        assert_eq!(err.code, 2);
        assert!(err.message.contains("--base-url expects a value"));
    }

    #[test]
    fn fails_on_unknown_option() {
        let result = parse_args(["--unknown"]);
        let err = result.expect_err("expected parse error");
        assert_eq!(err.code, 2);
        assert!(err.message.contains("unknown option"));
    }

    #[test]
    fn fails_on_positional_argument() {
        let result = parse_args(["abc"]);
        let err = result.expect_err("expected parse error");
        assert_eq!(err.code, 2);
        assert!(err.message.contains("unexpected argument"));
    }
}

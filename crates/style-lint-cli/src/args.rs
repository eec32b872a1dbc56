//! Command-line argument parsing
//!
//! Flags are matched by hand in a single pass. Anything that does not start
//! with `-` (and a lone `-`) is taken as an input path.

use std::str::FromStr;

use style_lint_core::{
    analysis::{IssueSeverity, LintConfig},
    CoreError, Result,
};

/// Usage text printed by `--help`
pub const USAGE: &str = "\
Usage: style-lint [OPTIONS] [FILE]...

Reports naming, specificity, ordering and color issues in CSS files.
With no FILE, or when FILE is -, reads standard input.

Options:
      --min-severity <LEVEL>  Only report issues at or above LEVEL
                              (info, hint, warning, error)
      --max-issues <N>        Stop after N issues per input (0 = no limit)
      --enable <RULE>         Only run RULE (repeatable)
      --disable <RULE>        Skip RULE (repeatable)
      --format <FORMAT>       Output format: text or json [default: text]
      --list-rules            List built-in rules and exit
      --sample                Lint the bundled sample stylesheet
  -v, --verbose               Enable debug logging
  -h, --help                  Print this help and exit";

/// How findings are written to stdout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// One finding per line, or the success message
    #[default]
    Text,
    /// One JSON array of issues per input
    Json,
}

impl FromStr for OutputFormat {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(CoreError::config(format_args!(
                "unknown output format '{other}' (expected text or json)"
            ))),
        }
    }
}

/// Parsed command line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    pub config: LintConfig,
    pub format: OutputFormat,
    /// Input paths in the order given; empty means stdin
    pub files: Vec<String>,
    pub sample: bool,
    pub list_rules: bool,
    pub verbose: bool,
    pub help: bool,
}

impl Options {
    /// Parse arguments, not including the program name
    ///
    /// # Errors
    ///
    /// Returns a configuration error on unknown flags, missing flag values,
    /// values that do not parse and unknown rule ids.
    pub fn parse<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut options = Self::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => options.help = true,
                "-v" | "--verbose" => options.verbose = true,
                "--list-rules" => options.list_rules = true,
                "--sample" => options.sample = true,
                "--min-severity" => {
                    let level: IssueSeverity = value_for(&arg, args.next())?.parse()?;
                    options.config = options.config.with_min_severity(level);
                }
                "--max-issues" => {
                    let value = value_for(&arg, args.next())?;
                    let max = value.parse().map_err(|_| {
                        CoreError::config(format_args!("invalid value '{value}' for --max-issues"))
                    })?;
                    options.config = options.config.with_max_issues(max);
                }
                "--enable" => {
                    let rule = value_for(&arg, args.next())?;
                    options.config = options.config.with_enabled_rule(rule);
                }
                "--disable" => {
                    let rule = value_for(&arg, args.next())?;
                    options.config = options.config.with_disabled_rule(rule);
                }
                "--format" => options.format = value_for(&arg, args.next())?.parse()?,
                "-" => options.files.push(arg),
                flag if flag.starts_with('-') => {
                    return Err(CoreError::config(format_args!("unknown option '{flag}'")));
                }
                _ => options.files.push(arg),
            }
        }

        options.config.validate()?;
        Ok(options)
    }
}

fn value_for(flag: &str, value: Option<String>) -> Result<String> {
    value.ok_or_else(|| CoreError::config(format_args!("missing value for {flag}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Options> {
        Options::parse(args.iter().map(ToString::to_string))
    }

    #[test]
    fn no_arguments_reads_stdin_with_defaults() {
        let options = parse(&[]).unwrap();
        assert_eq!(options, Options::default());
        assert!(options.files.is_empty());
        assert_eq!(options.format, OutputFormat::Text);
    }

    #[test]
    fn flags_map_onto_lint_config() {
        let options = parse(&[
            "--min-severity",
            "warn",
            "--max-issues",
            "5",
            "--enable",
            "color-naming",
            "--disable",
            "property-order",
            "--format",
            "json",
            "a.css",
            "-",
            "b.css",
        ])
        .unwrap();

        let expected = LintConfig::default()
            .with_min_severity(IssueSeverity::Warning)
            .with_max_issues(5)
            .with_enabled_rule("color-naming")
            .with_disabled_rule("property-order");
        assert_eq!(options.config, expected);
        assert_eq!(options.format, OutputFormat::Json);
        assert_eq!(options.files, ["a.css", "-", "b.css"]);
    }

    #[test]
    fn short_and_long_switches() {
        let options = parse(&["-v", "--sample", "--list-rules", "-h"]).unwrap();
        assert!(options.verbose);
        assert!(options.sample);
        assert!(options.list_rules);
        assert!(options.help);
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(
            parse(&["--bogus"]),
            Err(CoreError::config("unknown option '--bogus'"))
        );
        assert_eq!(
            parse(&["--max-issues", "many"]).unwrap_err().to_string(),
            "Configuration error: invalid value 'many' for --max-issues"
        );
        assert!(parse(&["--max-issues"]).is_err());
        assert_eq!(
            parse(&["--min-severity", "fatal"]),
            Err(CoreError::InvalidSeverity("fatal".to_string()))
        );
        assert!(parse(&["--format", "xml"]).is_err());
    }

    #[test]
    fn rejects_unknown_rule_ids() {
        assert_eq!(
            parse(&["--enable", "no-tabs"]),
            Err(CoreError::unknown_rule("no-tabs"))
        );
    }
}

//! `style-lint` command-line front end
//!
//! Reads CSS from files or stdin, runs every enabled rule and prints the
//! findings. Exit status is 0 when nothing was found, 1 when at least one
//! input had findings and 2 on usage or I/O errors.

use std::{
    fs,
    io::{self, Read, Write},
    process::ExitCode,
};

use anyhow::{Context, Result};
use log::{debug, warn};
use style_lint_core::{
    analysis::{linting::BuiltinRules, IssueCategory, LintConfig, StyleAnalysis},
    utils::{recover_utf8, strip_bom},
    CodeSubmission, CoreError,
};

mod args;

use args::{Options, OutputFormat, USAGE};

/// One stylesheet to analyse
#[derive(Debug)]
struct Input {
    /// Path as given, `<stdin>` or `<sample>`
    name: String,
    text: String,
}

fn main() -> ExitCode {
    let options = match Options::parse(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(err) => {
            report_error(&anyhow::Error::from(err));
            return ExitCode::from(2);
        }
    };

    init_logging(options.verbose);

    match run(&options) {
        Ok(true) => ExitCode::from(1),
        Ok(false) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err);
            ExitCode::from(2)
        }
    }
}

/// Print an error with the hints its category calls for
fn report_error(err: &anyhow::Error) {
    eprintln!("style-lint: {err:#}");

    let Some(core) = err.downcast_ref::<CoreError>() else {
        return;
    };
    if let Some(hint) = core.suggestion() {
        eprintln!("hint: {hint}");
    }
    if core.category().is_user_fixable() {
        eprintln!("Try 'style-lint --help' for more information.");
    }
}

/// Install the logger; `RUST_LOG` takes precedence over `--verbose`
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

/// Run the requested command, returning whether any findings were printed
fn run(options: &Options) -> Result<bool> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if options.help {
        writeln!(out, "{USAGE}")?;
        return Ok(false);
    }

    if options.list_rules {
        list_rules(&mut out)?;
        return Ok(false);
    }

    let inputs = collect_inputs(options)?;
    let show_names = inputs.len() > 1;
    let mut found_any = false;

    for (index, input) in inputs.iter().enumerate() {
        found_any |= report(&mut out, input, &options.config, options.format, show_names)?;

        if show_names && options.format == OutputFormat::Text && index + 1 < inputs.len() {
            writeln!(out)?;
        }
    }

    out.flush()?;
    Ok(found_any)
}

/// Print the rule registry, one rule per line, grouped by category
fn list_rules<W: Write>(out: &mut W) -> Result<()> {
    for category in IssueCategory::ALL {
        for rule in BuiltinRules::rules_for_category(category) {
            writeln!(
                out,
                "{:<16} {:<8} {:<16} {}",
                rule.id(),
                rule.default_severity().to_string(),
                category.to_string(),
                rule.description()
            )?;
        }
    }
    Ok(())
}

/// Gather the stylesheets named on the command line
fn collect_inputs(options: &Options) -> Result<Vec<Input>> {
    let mut inputs = Vec::new();

    if options.sample {
        inputs.push(Input {
            name: "<sample>".to_string(),
            text: CodeSubmission::sample().css,
        });
    }

    for path in &options.files {
        inputs.push(read_input(path)?);
    }

    if inputs.is_empty() {
        inputs.push(read_input("-")?);
    }

    Ok(inputs)
}

/// Read one input, `-` meaning stdin
fn read_input(path: &str) -> Result<Input> {
    let (name, bytes) = if path == "-" {
        let mut bytes = Vec::new();
        io::stdin()
            .read_to_end(&mut bytes)
            .map_err(CoreError::from)
            .context("failed to read standard input")?;
        ("<stdin>".to_string(), bytes)
    } else {
        let bytes = fs::read(path)
            .map_err(CoreError::from)
            .with_context(|| format!("failed to read '{path}'"))?;
        (path.to_string(), bytes)
    };

    Ok(Input {
        text: decode(&name, &bytes),
        name,
    })
}

/// Decode raw bytes into analysable text
fn decode(name: &str, bytes: &[u8]) -> String {
    let (text, replacements) = recover_utf8(bytes);
    if replacements > 0 {
        warn!("{name}: replaced {replacements} invalid UTF-8 sequences");
    }

    let (stripped, had_bom) = strip_bom(&text);
    if had_bom {
        debug!("{name}: stripped byte order mark");
        return stripped.to_string();
    }
    text
}

/// Analyse one input and print its findings
fn report<W: Write>(
    out: &mut W,
    input: &Input,
    config: &LintConfig,
    format: OutputFormat,
    show_name: bool,
) -> Result<bool> {
    let analysis = StyleAnalysis::analyze_with_config(&input.text, config)?;
    debug!("{}: {} issues", input.name, analysis.issues().len());

    match format {
        OutputFormat::Text => {
            if show_name {
                writeln!(out, "{}:", input.name)?;
            }
            writeln!(out, "{}", analysis.feedback())?;
        }
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, analysis.issues())
                .with_context(|| format!("failed to serialize issues for {}", input.name))?;
            writeln!(out)?;
        }
    }

    Ok(analysis.has_issues())
}

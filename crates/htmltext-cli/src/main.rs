//! htmltext CLI
//!
//! Converts HTML to plain text, or checks it.
//!
//! Exit status for the check modes: 0 when the check passes, 1 when it fails.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use htmltext::{LineBreak, TextOptions, TextService};
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

/// CLI flags
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Linebreak style: unix, lf, windows or crlf
    #[arg(long = "line-break", value_name = "STYLE", default_value = "unix")]
    line_break: LineBreak,

    /// Fail on tokenizer diagnostics instead of recovering
    #[arg(long, action = ArgAction::SetTrue)]
    strict: bool,

    /// Only check whether the input is plain text (no tags at all)
    #[arg(long = "check-plain", action = ArgAction::SetTrue, conflicts_with = "validate")]
    check_plain: bool,

    /// Only check that the input is well-formed
    #[arg(long, action = ArgAction::SetTrue)]
    validate: bool,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Input file (default: stdin)
    input: Option<PathBuf>,
}

impl Cli {
    fn options(&self) -> TextOptions {
        TextOptions::default()
            .line_break(self.line_break)
            .strict(self.strict)
    }
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
        }
        None => {
            let mut src = String::new();
            io::stdin()
                .read_to_string(&mut src)
                .context("reading stdin")?;
            Ok(src)
        }
    }
}

fn run(cli: &Cli) -> Result<ExitCode> {
    let src = read_input(cli.input.as_ref())?;
    let service = TextService::with_options(cli.options());

    if cli.check_plain {
        return Ok(if service.is_plain_text(&src) {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        });
    }

    if cli.validate {
        return Ok(match service.validate(&src) {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("{err}");
                ExitCode::FAILURE
            }
        });
    }

    let mut text = service
        .try_to_text(&src)
        .context("converting HTML to text")?;
    text.push_str(cli.options().line_break.as_str());

    match &cli.output {
        Some(path) => fs::write(path, text).with_context(|| format!("writing {}", path.display()))?,
        None => io::stdout()
            .lock()
            .write_all(text.as_bytes())
            .context("writing stdout")?,
    }
    Ok(ExitCode::SUCCESS)
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    run(&cli)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_flags() {
        let cli = Cli::try_parse_from(["htmltext", "page.html"]).unwrap();
        assert_eq!(cli.input, Some(PathBuf::from("page.html")));
        assert_eq!(cli.options(), TextOptions::default());
        assert!(!cli.check_plain && !cli.validate);
    }

    #[test]
    fn test_line_break_and_strict() {
        let cli = Cli::try_parse_from([
            "htmltext",
            "--line-break",
            "crlf",
            "--strict",
            "-o",
            "out.txt",
        ])
        .unwrap();
        assert_eq!(cli.options().line_break, LineBreak::Windows);
        assert!(cli.options().strict);
        assert_eq!(cli.output, Some(PathBuf::from("out.txt")));
        assert_eq!(cli.input, None);
    }

    #[test]
    fn test_unknown_line_break_rejected() {
        assert!(Cli::try_parse_from(["htmltext", "--line-break", "mac"]).is_err());
    }

    #[test]
    fn test_check_modes_conflict() {
        assert!(Cli::try_parse_from(["htmltext", "--check-plain", "--validate"]).is_err());
    }
}

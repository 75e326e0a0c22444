//! CLI handler for the `validate` command.

use crate::input::Input;
use anyhow::Result;
use clap::Parser;
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;
use utf8view::text::{validate_detailed, ReportConfig, Utf8Error, Utf8ErrorKind};
use utf8view::StrView;

/// Validate files for UTF-8 compliance.
#[derive(Debug, Parser)]
pub struct ValidateArgs {
    /// Input files to validate (reads from stdin if none provided)
    #[arg(trailing_var_arg = true)]
    pub files: Vec<PathBuf>,

    /// Quiet mode: exit code only, no output
    #[arg(short, long)]
    pub quiet: bool,

    /// Emit one JSON object per input on stdout instead of diagnostics
    #[arg(long)]
    pub json: bool,

    /// Widest snippet line shown in diagnostics
    #[arg(long)]
    pub snippet_width: Option<usize>,

    #[command(flatten)]
    pub color: crate::ColorArgs,
}

/// Exit codes for the validate command.
pub mod exit_codes {
    /// UTF-8 is valid.
    pub const SUCCESS: i32 = 0;
    /// UTF-8 is invalid (validation error).
    pub const INVALID: i32 = 1;
    /// I/O error (file not found, permission denied, etc.).
    pub const IO_ERROR: i32 = 2;
}

/// ANSI color codes for error output.
mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const LOCATION: &str = "\x1b[1;34m"; // Bold blue
    pub const LINE_NUM: &str = "\x1b[0;34m"; // Blue
    pub const CARET: &str = "\x1b[1;32m"; // Bold green
    pub const MESSAGE: &str = "\x1b[0;33m"; // Yellow
    pub const SUCCESS: &str = "\x1b[1;32m"; // Bold green
}

/// Color scheme that can be disabled.
pub struct ColorScheme {
    pub error: &'static str,
    location: &'static str,
    line_num: &'static str,
    caret: &'static str,
    message: &'static str,
    pub success: &'static str,
    pub reset: &'static str,
}

impl ColorScheme {
    pub fn new(use_color: bool) -> Self {
        if use_color {
            Self {
                error: colors::ERROR,
                location: colors::LOCATION,
                line_num: colors::LINE_NUM,
                caret: colors::CARET,
                message: colors::MESSAGE,
                success: colors::SUCCESS,
                reset: colors::RESET,
            }
        } else {
            Self {
                error: "",
                location: "",
                line_num: "",
                caret: "",
                message: "",
                success: "",
                reset: "",
            }
        }
    }
}

/// One line of `--json` output.
#[derive(Debug, Serialize)]
struct ValidationRecord<'a> {
    file: &'a str,
    valid: bool,
    bytes: usize,
    codepoints: usize,
    error: Option<&'a Utf8Error>,
}

/// Run the validate command.
pub fn run(args: ValidateArgs, mut config: ReportConfig) -> Result<i32> {
    if let Some(width) = args.snippet_width {
        config = config.with_snippet_width(width);
    }
    config = args.color.apply(config);

    let scheme = ColorScheme::new(config.color.use_color(atty::is(atty::Stream::Stderr)));

    if args.files.is_empty() {
        let input = Input::stdin()?;
        return validate_input(&input, "<stdin>", &args, &config, &scheme);
    }

    let mut any_invalid = false;
    let mut any_io_error = false;

    for path in &args.files {
        match Input::open(path) {
            Ok(input) => {
                let filename = path.to_string_lossy();
                let result = validate_input(&input, &filename, &args, &config, &scheme)?;
                if result == exit_codes::INVALID {
                    any_invalid = true;
                }
            }
            Err(e) => {
                any_io_error = true;
                if !args.quiet {
                    eprintln!("{}error{}: {:#}", scheme.error, scheme.reset, e);
                }
            }
        }
    }

    if any_io_error {
        Ok(exit_codes::IO_ERROR)
    } else if any_invalid {
        Ok(exit_codes::INVALID)
    } else {
        Ok(exit_codes::SUCCESS)
    }
}

/// Validate a single input and report the outcome.
fn validate_input(
    input: &[u8],
    filename: &str,
    args: &ValidateArgs,
    config: &ReportConfig,
    scheme: &ColorScheme,
) -> Result<i32> {
    let view = StrView::new(input);
    let outcome = validate_detailed(view);

    if args.json {
        let record = ValidationRecord {
            file: filename,
            valid: outcome.is_ok(),
            bytes: view.len(),
            codepoints: view.utf_length(),
            error: outcome.as_ref().err(),
        };
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        serde_json::to_writer(&mut out, &record)?;
        writeln!(out)?;
    } else if !args.quiet {
        match &outcome {
            Ok(()) => eprintln!(
                "{}✓{} {}: valid UTF-8 ({} bytes, {} codepoints)",
                scheme.success,
                scheme.reset,
                filename,
                view.len(),
                view.utf_length()
            ),
            Err(err) => eprint!("{}", render_error(err, input, filename, config, scheme)),
        }
    }

    Ok(match outcome {
        Ok(()) => exit_codes::SUCCESS,
        Err(_) => exit_codes::INVALID,
    })
}

/// Render a diagnostic with a context snippet.
fn render_error(
    err: &Utf8Error,
    input: &[u8],
    filename: &str,
    config: &ReportConfig,
    scheme: &ColorScheme,
) -> String {
    use std::fmt::Write as _;

    let mut out = String::new();

    let _ = writeln!(
        out,
        "{}error{}: {}",
        scheme.error,
        scheme.reset,
        format_error_kind(&err.kind, err.offset, input)
    );
    let _ = writeln!(
        out,
        "  {}--> {}:{}:{}{}",
        scheme.location, filename, err.line, err.column, scheme.reset
    );

    let snippet = get_error_snippet(input, err.offset, config);

    // Line number width (minimum 3 chars for alignment)
    let line_num_width = err.line.to_string().len().max(3);
    let blank_padding = " ".repeat(line_num_width + 2);

    let _ = writeln!(out, "{}{}|{}", blank_padding, scheme.line_num, scheme.reset);
    let _ = writeln!(
        out,
        " {}{:>width$}{} {}|{} {}",
        scheme.line_num,
        err.line,
        scheme.reset,
        scheme.line_num,
        scheme.reset,
        snippet.line_content,
        width = line_num_width
    );

    let padding = " ".repeat(snippet.caret_offset);
    let carets = "^".repeat(snippet.caret_width.max(1));
    let hint = match err.kind.hint() {
        Some(h) => format!(" {}{}{}", scheme.message, h, scheme.reset),
        None => String::new(),
    };
    let _ = writeln!(
        out,
        "{}{}|{} {}{}{}{}{}",
        blank_padding,
        scheme.line_num,
        scheme.reset,
        padding,
        scheme.caret,
        carets,
        scheme.reset,
        hint
    );
    out.push('\n');

    out
}

/// Format the error kind as a human-readable message.
fn format_error_kind(kind: &Utf8ErrorKind, offset: usize, input: &[u8]) -> String {
    match kind {
        Utf8ErrorKind::InvalidLeadByte | Utf8ErrorKind::InvalidContinuationByte => {
            match input.get(offset) {
                Some(byte) => format!("{} (byte 0x{:02X})", kind, byte),
                None => kind.to_string(),
            }
        }
        Utf8ErrorKind::TruncatedSequence => format!("{} at end of input", kind),
        _ => kind.to_string(),
    }
}

/// Information about an error snippet.
#[derive(Debug, PartialEq, Eq)]
struct ErrorSnippet {
    /// The content of the line containing the error.
    line_content: String,
    /// Number of columns before the caret.
    caret_offset: usize,
    /// Width of the caret (number of ^ characters).
    caret_width: usize,
}

/// Extract the line around `offset`, rendered lossily with tabs expanded,
/// and the column of `offset` within that rendering.
fn get_error_snippet(input: &[u8], offset: usize, config: &ReportConfig) -> ErrorSnippet {
    let offset = offset.min(input.len());
    let line_start = input[..offset]
        .iter()
        .rposition(|&b| b == b'\n')
        .map_or(0, |i| i + 1);
    let line_end = input[offset..]
        .iter()
        .position(|&b| b == b'\n')
        .map_or(input.len(), |i| offset + i);

    let before = render(StrView::from_range(input, line_start, offset), config.tab_width);
    let after = render(StrView::from_range(input, offset, line_end), config.tab_width);
    let after = after.strip_suffix('\r').unwrap_or(&after);

    let line: Vec<char> = before.chars().chain(after.chars()).collect();
    let error_col = before.chars().count();

    // Truncate long lines
    let max_width = config.snippet_width;
    let (line_content, caret_offset) = if line.len() <= max_width {
        (line.iter().collect(), error_col)
    } else if error_col < max_width / 2 {
        let truncated: String = line[..max_width].iter().collect();
        (format!("{}...", truncated), error_col)
    } else if error_col >= line.len() - max_width / 2 {
        let start = line.len() - max_width;
        let truncated: String = line[start..].iter().collect();
        (format!("...{}", truncated), error_col - start + 3)
    } else {
        let start = error_col - max_width / 2;
        let truncated: String = line[start..start + max_width].iter().collect();
        (format!("...{}...", truncated), error_col - start + 3)
    };

    ErrorSnippet {
        line_content,
        caret_offset,
        caret_width: 1,
    }
}

fn render(view: StrView<'_>, tab_width: usize) -> String {
    view.to_string().replace('\t', &" ".repeat(tab_width))
}

//! CLI handlers for the `stat` and `chars` commands.

use crate::input::Input;
use crate::validate::{exit_codes, ColorScheme};
use anyhow::Result;
use clap::Parser;
use serde::Serialize;
use std::io::{self, Write};
use std::path::PathBuf;
use utf8view::text::ReportConfig;
use utf8view::StrView;

/// Print byte length, codepoint length and validity of each input.
#[derive(Debug, Parser)]
pub struct StatArgs {
    /// Input files (reads from stdin if none provided)
    #[arg(trailing_var_arg = true)]
    pub files: Vec<PathBuf>,

    /// Emit one JSON object per input
    #[arg(long)]
    pub json: bool,
}

/// List the codepoints of one input.
#[derive(Debug, Parser)]
pub struct CharsArgs {
    /// Input file (reads from stdin if omitted)
    pub file: Option<PathBuf>,

    /// Stop after this many codepoints
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Skip this many codepoints first
    #[arg(long, default_value = "0")]
    pub skip: usize,

    #[command(flatten)]
    pub color: crate::ColorArgs,
}

/// Summary of one input.
#[derive(Debug, PartialEq, Eq, Serialize)]
struct Stat {
    file: String,
    bytes: usize,
    codepoints: usize,
    valid: bool,
}

fn stat(view: StrView<'_>, file: &str) -> Stat {
    Stat {
        file: file.to_string(),
        bytes: view.len(),
        codepoints: view.utf_length(),
        valid: view.validate(),
    }
}

/// Run the stat command.
pub fn run_stat(args: StatArgs) -> Result<i32> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.files.is_empty() {
        let input = Input::stdin()?;
        let s = stat(StrView::new(&input), "<stdin>");
        write_stat(&s, args.json, &mut out)?;
        return Ok(if s.valid {
            exit_codes::SUCCESS
        } else {
            exit_codes::INVALID
        });
    }

    stat_files(&args.files, args.json, &mut out)
}

/// Report every file, carrying on past the ones that cannot be opened.
fn stat_files(files: &[PathBuf], json: bool, out: &mut dyn Write) -> Result<i32> {
    let mut any_invalid = false;
    let mut any_io_error = false;

    for path in files {
        match Input::open(path) {
            Ok(input) => {
                let s = stat(StrView::new(&input), &path.to_string_lossy());
                any_invalid |= !s.valid;
                write_stat(&s, json, out)?;
            }
            Err(e) => {
                any_io_error = true;
                eprintln!("error: {:#}", e);
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

fn write_stat(s: &Stat, json: bool, out: &mut dyn Write) -> Result<()> {
    if json {
        serde_json::to_writer(&mut *out, s)?;
        writeln!(out)?;
    } else {
        writeln!(
            out,
            "{}\t{}\t{}\t{}",
            s.bytes,
            s.codepoints,
            if s.valid { "valid" } else { "invalid" },
            s.file
        )?;
    }
    Ok(())
}

/// Run the chars command.
pub fn run_chars(args: CharsArgs, config: ReportConfig) -> Result<i32> {
    let config = args.color.apply(config);
    let scheme = ColorScheme::new(config.color.use_color(atty::is(atty::Stream::Stderr)));

    let input = match &args.file {
        Some(path) => Input::open(path)?,
        None => Input::stdin()?,
    };
    let view = StrView::new(&input);

    if let Err(err) = utf8view::text::validate_detailed(view) {
        eprintln!(
            "{}error{}: refusing to decode malformed input: {}",
            scheme.error, scheme.reset, err
        );
        return Ok(exit_codes::INVALID);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_chars(view, args.skip, args.limit, &mut out)?;

    Ok(exit_codes::SUCCESS)
}

/// One line per codepoint: byte offset, scalar value, escaped character.
///
/// `view` must already be validated.
fn write_chars(
    view: StrView<'_>,
    skip: usize,
    limit: Option<usize>,
    out: &mut dyn Write,
) -> io::Result<()> {
    let total = view.utf_length();
    let mut it = view.next_char(skip.min(total));
    let mut remaining = limit.unwrap_or(usize::MAX);
    let mut element = StrView::empty();

    while !it.eof() && remaining > 0 {
        it = it.iter_next_view(&mut element, 1);
        let cp = element.as_char();
        let shown = char::from_u32(cp)
            .map(|c| c.escape_debug().to_string())
            .unwrap_or_default();

        writeln!(out, "{:>8}  U+{:04X}  {}", element.begin(), cp, shown)?;
        remaining -= 1;
    }

    Ok(())
}

//! Feeds lines from a reader through an [`Editor`] and writes the replies.
//!
//! Every input line produces either its rendered image lines (for `S`),
//! nothing (for a successful paint), or exactly one diagnostic line.

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::editor::Editor;
use crate::perf;

/// Counts collected over one run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Lines read from the input.
    pub processed: usize,
    /// Lines that produced a diagnostic instead of running.
    pub rejected: usize,
    /// The subset of `rejected` that never parsed into a command.
    pub malformed: usize,
}

/// Process every line of `input` in order.
///
/// Rejected commands are reported on `out` and processing continues.
/// Bytes that are not UTF-8 are replaced before parsing, so such a line
/// is rejected like any other unknown command.
///
/// # Errors
/// Returns an error if reading `input` or writing `out` fails.
pub fn run<R: BufRead, W: Write>(
    editor: &mut Editor,
    mut input: R,
    out: &mut W,
) -> Result<RunSummary> {
    let mut summary = RunSummary::default();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        let number = summary.processed + 1;
        let read = input
            .read_until(b'\n', &mut buf)
            .with_context(|| format!("Failed to read input line {number}"))?;
        if read == 0 {
            break;
        }
        summary.processed = number;

        let line = String::from_utf8_lossy(&buf);
        let outcome = editor.execute(&line);
        perf::trace_command(number, editor.last_command().unwrap_or_default(), &outcome);
        match outcome {
            Ok(reply) => {
                for row in reply.lines() {
                    writeln!(out, "{row}").context("Failed to write output")?;
                }
            }
            Err(err) => {
                summary.rejected += 1;
                if err.is_syntax() {
                    summary.malformed += 1;
                }
                tracing::debug!(line = number, %err, "command rejected");
                writeln!(out, "{err}").context("Failed to write output")?;
            }
        }
    }
    out.flush().context("Failed to flush output")?;

    tracing::info!(
        processed = summary.processed,
        rejected = summary.rejected,
        malformed = summary.malformed,
        "script finished"
    );
    Ok(summary)
}

/// Open `path` and [`run`] it.
///
/// # Errors
/// Returns an error if the file cannot be opened or read, or output fails.
pub fn run_file<W: Write>(editor: &mut Editor, path: &Path, out: &mut W) -> Result<RunSummary> {
    let file = File::open(path)
        .with_context(|| format!("please provide correct file: {}", path.display()))?;
    run(editor, BufReader::new(file), out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_str(script: &str) -> (String, RunSummary) {
        let mut editor = Editor::new();
        let mut out = Vec::new();
        let summary = run(&mut editor, Cursor::new(script), &mut out).unwrap();
        (String::from_utf8(out).unwrap(), summary)
    }

    #[test]
    fn test_show_prints_rows() {
        let (out, summary) = run_str("I 5 6\nL 1 3 A\nV 2 3 6 W\nH 3 5 2 Z\nS\n");
        assert_eq!(out, "OOOOO\nOOZZZ\nAWOOO\nOWOOO\nOWOOO\nOWOOO\n");
        assert_eq!(
            summary,
            RunSummary {
                processed: 5,
                rejected: 0,
                malformed: 0
            }
        );
    }

    #[test]
    fn test_each_rejected_line_prints_one_diagnostic_and_run_continues() {
        let (out, summary) = run_str("L 1 1 A\nX 1 2\nI 10 a\nI 2 1\nS");
        assert_eq!(
            out,
            "there is no image\nunrecognised command :( : X 1 2\nwrong type of arguments: I 10 a\nOO\n"
        );
        assert_eq!(summary.rejected, 3);
        assert_eq!(summary.malformed, 2);
        assert_eq!(summary.processed, 5);
    }

    #[test]
    fn test_invalid_utf8_line_is_rejected_and_run_continues() {
        let mut editor = Editor::new();
        let mut out = Vec::new();
        let input: &[u8] = b"I 2 1\n\xff\nL 1 1 A\nS\n";
        let summary = run(&mut editor, Cursor::new(input), &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "unrecognised command :( : \u{FFFD}\nAO\n"
        );
        assert_eq!(
            summary,
            RunSummary {
                processed: 4,
                rejected: 1,
                malformed: 1
            }
        );
    }

    #[test]
    fn test_last_line_without_newline_is_processed() {
        let (out, summary) = run_str("I 1 1\nS");
        assert_eq!(out, "O\n");
        assert_eq!(summary.processed, 2);
    }

    #[test]
    fn test_crlf_input_is_echoed_without_carriage_return() {
        let (out, _) = run_str("C 1\r\n");
        assert_eq!(out, "wrong number of arguments: C 1\n");
    }

    #[test]
    fn test_empty_input_produces_nothing() {
        let (out, summary) = run_str("");
        assert!(out.is_empty());
        assert_eq!(summary, RunSummary::default());
    }

    #[test]
    fn test_run_file_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.txt");
        let mut out = Vec::new();
        let err = run_file(&mut Editor::new(), &missing, &mut out).unwrap_err();
        assert!(err.to_string().starts_with("please provide correct file"));
        assert!(out.is_empty());
    }
}

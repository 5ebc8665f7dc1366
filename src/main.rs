//! Bitmap editor - run a file of drawing commands, or type them interactively.
//!
//! # Usage
//!
//! ```bash
//! bitmap-editor commands.txt
//! bitmap-editor --max-width 80 --max-height 40 commands.txt
//! bitmap-editor            # read commands from stdin
//! ```

use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use bitmap_editor::config::{
    ConfigFlags, clear_config_flags, global_config_path, load_config_flags, local_override_path,
    parse_flag_tokens, save_config_flags,
};
use bitmap_editor::editor::Editor;
use bitmap_editor::{perf, script};

/// A line-oriented bitmap editing command interpreter
#[derive(Parser, Debug)]
#[command(name = "bitmap-editor", version, about, long_about = None)]
struct Cli {
    /// Command file to run; omit or pass `-` to read from stdin
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Largest image width accepted by `I`
    #[arg(long, value_name = "N")]
    max_width: Option<usize>,

    /// Largest image height accepted by `I`
    #[arg(long, value_name = "N")]
    max_height: Option<usize>,

    /// Print timing information to stderr
    #[arg(long)]
    perf: bool,

    /// Write every processed command to a debug log file
    #[arg(long, value_name = "PATH")]
    debug_log: Option<PathBuf>,

    /// Save current command-line flags as defaults
    #[arg(long)]
    save: bool,

    /// Clear saved defaults
    #[arg(long)]
    clear: bool,
}

fn main() -> Result<()> {
    // Diagnostics go to stderr; stdout carries the command protocol.
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let raw_args = std::env::args().collect::<Vec<_>>();
    let cli = Cli::parse();
    let global_path = global_config_path();
    let local_path = local_override_path();
    let cli_flags = parse_flag_tokens(&raw_args);

    if cli.clear {
        clear_config_flags(&global_path)?;
    }
    if cli.save {
        save_config_flags(&global_path, &cli_flags)?;
    }

    let file_flags = if cli.clear {
        ConfigFlags::default()
    } else {
        let global_flags = load_config_flags(&global_path)?;
        let local_flags = load_config_flags(&local_path)?;
        global_flags.union(&local_flags)
    };
    let effective = file_flags.union(&cli_flags);
    tracing::debug!(?effective, "effective configuration");

    perf::set_enabled(effective.perf);
    if let Some(path) = effective.debug_log.as_deref() {
        if let Err(err) = perf::set_trace_path(Some(path)) {
            tracing::warn!(path = %path.display(), %err, "failed to open debug log");
        }
    }

    let mut editor = Editor::with_bounds(effective.bounds());
    let mut out = io::stdout().lock();

    let result = match cli.file.as_deref() {
        None => run_stdin(&mut editor, &mut out),
        Some(path) if path == Path::new("-") => run_stdin(&mut editor, &mut out),
        Some(path) => {
            if !path.is_file() {
                anyhow::bail!("please provide correct file: {}", path.display());
            }
            script::run_file(&mut editor, path, &mut out).map(drop)
        }
    };
    perf::report_timings();
    result
}

fn run_stdin(editor: &mut Editor, out: &mut impl io::Write) -> Result<()> {
    script::run(editor, io::stdin().lock(), out)
        .map(drop)
        .context("Failed to process stdin")
}

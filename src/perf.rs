//! Per-command timing and an optional trace of every processed line.
//!
//! Timing is aggregated by command name (`point`, `show`, ...) and printed
//! once at the end of a run with `--perf`. The trace (`--debug-log PATH`)
//! records each input line with its outcome as the script runs.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{LazyLock, Mutex};
use std::time::{Duration, Instant};

use crate::editor::{EditorError, Reply};

static ENABLED: AtomicBool = AtomicBool::new(false);
static TIMINGS: LazyLock<Mutex<BTreeMap<&'static str, Timing>>> =
    LazyLock::new(|| Mutex::new(BTreeMap::new()));
static TRACE: LazyLock<Mutex<Option<Trace>>> = LazyLock::new(|| Mutex::new(None));

/// Accumulated cost of one kind of command.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub count: usize,
    pub total: Duration,
}

/// Adds its lifetime to the timing of its command kind on drop.
#[derive(Debug)]
pub struct CommandTimer {
    kind: &'static str,
    start: Instant,
}

impl CommandTimer {
    /// Book the elapsed time under `kind` instead, once it is known.
    pub const fn relabel(&mut self, kind: &'static str) {
        self.kind = kind;
    }
}

impl Drop for CommandTimer {
    fn drop(&mut self) {
        if !is_enabled() {
            return;
        }
        let elapsed = self.start.elapsed();
        let mut timings = TIMINGS.lock().expect("timings lock poisoned");
        let timing = timings.entry(self.kind).or_default();
        timing.count += 1;
        timing.total += elapsed;
    }
}

#[derive(Debug)]
struct Trace {
    start: Instant,
    writer: BufWriter<File>,
}

pub fn set_enabled(enabled: bool) {
    ENABLED.store(enabled, Ordering::Relaxed);
}

pub fn is_enabled() -> bool {
    ENABLED.load(Ordering::Relaxed)
}

pub fn time_command(kind: &'static str) -> CommandTimer {
    CommandTimer {
        kind,
        start: Instant::now(),
    }
}

/// Snapshot of the timings collected so far, ordered by command name.
pub fn timings() -> Vec<(&'static str, Timing)> {
    TIMINGS
        .lock()
        .expect("timings lock poisoned")
        .iter()
        .map(|(kind, timing)| (*kind, *timing))
        .collect()
}

/// Print and reset the collected timings. Does nothing unless enabled.
pub fn report_timings() {
    if !is_enabled() {
        return;
    }
    let timings = std::mem::take(&mut *TIMINGS.lock().expect("timings lock poisoned"));
    for (kind, timing) in timings {
        eprintln!(
            "[perf] {kind}: {} commands, {:.2} ms total",
            timing.count,
            timing.total.as_secs_f64() * 1000.0
        );
    }
}

/// Start tracing commands to `path`, or stop when `None`.
///
/// # Errors
/// Returns an error if the trace file cannot be created or written.
pub fn set_trace_path(path: Option<&Path>) -> std::io::Result<()> {
    let mut trace = TRACE.lock().expect("trace lock poisoned");
    *trace = None;
    if let Some(path) = path {
        let mut writer = BufWriter::new(File::create(path)?);
        writeln!(writer, "bitmap-editor trace start")?;
        writer.flush()?;
        *trace = Some(Trace {
            start: Instant::now(),
            writer,
        });
    }
    Ok(())
}

/// Record input line `number` and what the editor made of it.
pub fn trace_command(number: usize, line: &str, outcome: &Result<Reply, EditorError>) {
    let mut guard = TRACE.lock().expect("trace lock poisoned");
    let Some(trace) = guard.as_mut() else {
        return;
    };
    let detail = match outcome {
        Ok(Reply::Done) => "ok".to_string(),
        Ok(Reply::Image(rows)) => format!("shown {} rows", rows.len()),
        Err(err) => format!("rejected ({})", err.label()),
    };
    let elapsed_ms = trace.start.elapsed().as_secs_f64() * 1000.0;
    let written = writeln!(
        trace.writer,
        "[{elapsed_ms:>10.3} ms] line {number} {line:?}: {detail}"
    )
    .and_then(|()| trace.writer.flush());
    if let Err(err) = written {
        tracing::warn!(%err, "failed to write command trace");
    }
}

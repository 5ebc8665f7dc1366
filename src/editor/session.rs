use super::{Command, EditorError};
use crate::bitmap::{Color, Grid, GridError};
use crate::perf;

/// Largest image side accepted by default, in both directions.
pub const DEFAULT_MAX_SIZE: usize = 250;

/// Size limits applied to `I` commands. Held per editor, never global.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub max_width: usize,
    pub max_height: usize,
}

impl Bounds {
    /// Limits below 1 are raised to 1.
    pub fn new(max_width: usize, max_height: usize) -> Self {
        Self {
            max_width: max_width.max(1),
            max_height: max_height.max(1),
        }
    }

    /// Whether a `width` x `height` image fits these limits.
    pub fn admits(&self, width: i64, height: i64) -> bool {
        (1..=self.max_width as i64).contains(&width)
            && (1..=self.max_height as i64).contains(&height)
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_SIZE, DEFAULT_MAX_SIZE)
    }
}

/// Successful outcome of one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// The command ran and has nothing to print.
    Done,
    /// `S` output: one string per row, top row first.
    Image(Vec<String>),
}

impl Reply {
    /// Lines to print for this reply.
    pub fn lines(&self) -> &[String] {
        match self {
            Self::Done => &[],
            Self::Image(rows) => rows,
        }
    }
}

/// An editing session: zero or one image plus the limits for creating one.
#[derive(Debug, Clone, Default)]
pub struct Editor {
    bounds: Bounds,
    grid: Option<Grid>,
    last_command: Option<String>,
}

impl Editor {
    /// A session with the default 250x250 limits and no image.
    pub fn new() -> Self {
        Self::default()
    }

    /// A session with custom size limits.
    pub fn with_bounds(bounds: Bounds) -> Self {
        Self {
            bounds,
            ..Self::default()
        }
    }

    pub const fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// The current image, if one has been created.
    pub const fn grid(&self) -> Option<&Grid> {
        self.grid.as_ref()
    }

    /// `(width, height)` of the current image, `(0, 0)` before the first `I`.
    pub fn dimensions(&self) -> (usize, usize) {
        self.grid
            .as_ref()
            .map_or((0, 0), |grid| (grid.width(), grid.height()))
    }

    /// The most recent line passed to [`Editor::execute`], newline stripped.
    pub fn last_command(&self) -> Option<&str> {
        self.last_command.as_deref()
    }

    /// Parse, validate and run one input line.
    ///
    /// A trailing `\n` or `\r\n` is removed before parsing; the remaining
    /// text is echoed verbatim in any diagnostic.
    ///
    /// # Errors
    /// Returns the [`EditorError`] describing why the command was rejected.
    /// A rejected command leaves the session's image unchanged.
    pub fn execute(&mut self, line: &str) -> Result<Reply, EditorError> {
        let line = line.strip_suffix('\n').unwrap_or(line);
        let line = line.strip_suffix('\r').unwrap_or(line);
        self.last_command = Some(line.to_string());

        let mut timer = perf::time_command("malformed");
        let command = Command::parse(line)?;
        timer.relabel(command.name());
        tracing::debug!(?command, "dispatch");
        self.apply(command, line)
    }

    /// Run an already parsed command. `raw` is echoed in diagnostics.
    ///
    /// # Errors
    /// Returns the [`EditorError`] describing why the command was rejected.
    pub fn apply(&mut self, command: Command, raw: &str) -> Result<Reply, EditorError> {
        match command {
            Command::Unrecognized { raw: line } => Err(EditorError::Unrecognized(line)),
            Command::Create { width, height } => self.create(width, height, raw),
            Command::Show => {
                let grid = self.grid.as_ref().ok_or(EditorError::NoImage)?;
                Ok(Reply::Image(grid.render_lines()))
            }
            Command::Clear => self.paint(raw, |grid| {
                let (width, height) = (grid.width() as i64, grid.height() as i64);
                grid.set_region(1, width, 1, height, Color::WHITE)
            }),
            Command::Point { col, row, color } => {
                self.paint(raw, |grid| grid.set_region(col, col, row, row, color))
            }
            Command::VerticalLine {
                col,
                row1,
                row2,
                color,
            } => self.paint(raw, |grid| grid.set_region(col, col, row1, row2, color)),
            Command::HorizontalLine {
                col1,
                col2,
                row,
                color,
            } => self.paint(raw, |grid| grid.set_region(col1, col2, row, row, color)),
        }
    }

    fn paint(
        &mut self,
        raw: &str,
        fill: impl FnOnce(&mut Grid) -> Result<(), GridError>,
    ) -> Result<Reply, EditorError> {
        let grid = self.grid.as_mut().ok_or(EditorError::NoImage)?;
        fill(grid).map_err(|err| self.failure(err, raw))?;
        Ok(Reply::Done)
    }

    fn create(&mut self, width: i64, height: i64, raw: &str) -> Result<Reply, EditorError> {
        if !self.bounds.admits(width, height) {
            return Err(self.size_failure(raw));
        }
        let grid = Grid::new(width, height).map_err(|err| self.failure(err, raw))?;
        tracing::debug!(width, height, "new image");
        self.grid = Some(grid);
        Ok(Reply::Done)
    }

    fn failure(&self, err: GridError, raw: &str) -> EditorError {
        match err {
            GridError::OutOfRange { width, height } => EditorError::OutOfRange {
                command: raw.to_string(),
                width,
                height,
            },
            GridError::InvalidSize { .. } => self.size_failure(raw),
        }
    }

    fn size_failure(&self, raw: &str) -> EditorError {
        EditorError::InvalidSize {
            command: raw.to_string(),
            max_width: self.bounds.max_width,
            max_height: self.bounds.max_height,
        }
    }
}

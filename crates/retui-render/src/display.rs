#![forbid(unsafe_code)]

//! Display device backends.
//!
//! The core talks to the display through exactly two operations: query
//! the current column/row count, and write an array of `{glyph,
//! attribute}` cells to an origin in one call. [`TermDisplay`] drives a
//! real terminal through crossterm; [`MemoryDisplay`] is the software
//! device used by tests. Nothing else of the device (scrollback, mouse,
//! cursor shape) is touched.

use crate::buffer::Buffer;
use crate::cell::Cell;
use crossterm::style::{Colors, SetColors};
use crossterm::{cursor, execute, queue, style, terminal};
use retui_core::geometry::Vec2;
use smallvec::SmallVec;
use std::fmt;
use std::io::{self, Stdout, Write};

/// Display device errors.
///
/// The frame loop converts any of these into a forced resize-and-redraw
/// on the next frame rather than propagating them as a crash.
#[derive(Debug)]
pub enum DisplayError {
    /// An I/O failure talking to the device.
    Io(io::Error),
}

impl fmt::Display for DisplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "display i/o error: {err}"),
        }
    }
}

impl std::error::Error for DisplayError {}

impl From<io::Error> for DisplayError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

/// A swappable display device.
pub trait Display {
    /// Current (columns, rows) of the device.
    fn size(&self) -> Result<(u16, u16), DisplayError>;

    /// Bulk-write a full frame's cells with the frame's top-left placed
    /// at `origin` on the device.
    fn present(&mut self, origin: Vec2, frame: &Buffer) -> Result<(), DisplayError>;
}

/// In-memory display for tests: remembers the last presented frame.
#[derive(Debug, Clone)]
pub struct MemoryDisplay {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
    presents: u32,
}

impl MemoryDisplay {
    /// Create a device reporting the given size.
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::BLANK; width as usize * height as usize],
            presents: 0,
        }
    }

    /// Simulate the user resizing the device.
    pub fn set_size(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.cells = vec![Cell::BLANK; width as usize * height as usize];
    }

    /// The glyph last presented at (x, y), if in device bounds.
    #[must_use]
    pub fn glyph_at(&self, x: u16, y: u16) -> Option<char> {
        if x < self.width && y < self.height {
            Some(self.cells[y as usize * self.width as usize + x as usize].glyph)
        } else {
            None
        }
    }

    /// The cell last presented at (x, y), if in device bounds.
    #[must_use]
    pub fn cell_at(&self, x: u16, y: u16) -> Option<&Cell> {
        if x < self.width && y < self.height {
            self.cells.get(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Number of `present` calls this device has received.
    #[must_use]
    pub const fn presents(&self) -> u32 {
        self.presents
    }
}

impl Display for MemoryDisplay {
    fn size(&self) -> Result<(u16, u16), DisplayError> {
        Ok((self.width, self.height))
    }

    fn present(&mut self, origin: Vec2, frame: &Buffer) -> Result<(), DisplayError> {
        self.presents += 1;
        for y in 0..frame.height() as i32 {
            for x in 0..frame.width() as i32 {
                let dst = origin + Vec2::new(x, y);
                if dst.x < 0 || dst.x >= self.width as i32 || dst.y < 0 || dst.y >= self.height as i32
                {
                    continue;
                }
                let src = frame.get(Vec2::new(x, y)).copied().unwrap_or(Cell::BLANK);
                self.cells[dst.y as usize * self.width as usize + dst.x as usize] = src;
            }
        }
        Ok(())
    }
}

/// A real terminal driven through crossterm.
///
/// Construction switches the terminal into the alternate screen with raw
/// mode and a hidden cursor; `Drop` restores it.
pub struct TermDisplay {
    out: Stdout,
}

impl TermDisplay {
    /// Take over the terminal.
    pub fn new() -> Result<Self, DisplayError> {
        let mut out = io::stdout();
        terminal::enable_raw_mode()?;
        execute!(out, terminal::EnterAlternateScreen, cursor::Hide)?;
        Ok(Self { out })
    }
}

impl Display for TermDisplay {
    fn size(&self) -> Result<(u16, u16), DisplayError> {
        Ok(terminal::size()?)
    }

    fn present(&mut self, origin: Vec2, frame: &Buffer) -> Result<(), DisplayError> {
        #[cfg(feature = "tracing")]
        tracing::trace!(
            width = frame.width(),
            height = frame.height(),
            "present frame"
        );

        for y in 0..frame.height() as i32 {
            // Batch each row into runs of identical attributes so one
            // SetColors covers many glyphs.
            let mut run: SmallVec<[char; 64]> = SmallVec::new();
            let mut run_attr: Option<(u8, i32)> = None;

            for x in 0..frame.width() as i32 {
                let cell = frame.get(Vec2::new(x, y)).copied().unwrap_or(Cell::BLANK);
                let attr = cell.attr();
                match run_attr {
                    Some((a, _)) if a == attr => run.push(visible_glyph(&cell)),
                    _ => {
                        self.flush_run(origin, y, &mut run_attr, &mut run)?;
                        run_attr = Some((attr, x));
                        run.push(visible_glyph(&cell));
                    }
                }
            }
            self.flush_run(origin, y, &mut run_attr, &mut run)?;
        }

        self.out.flush()?;
        Ok(())
    }
}

impl TermDisplay {
    fn flush_run(
        &mut self,
        origin: Vec2,
        y: i32,
        run_attr: &mut Option<(u8, i32)>,
        run: &mut SmallVec<[char; 64]>,
    ) -> Result<(), DisplayError> {
        let Some((attr, start_x)) = run_attr.take() else {
            return Ok(());
        };
        let (fg, bg) = retui_style::Color::unpack_attr(attr);
        let pos_x = origin.x + start_x;
        let pos_y = origin.y + y;
        if pos_x < 0 || pos_y < 0 {
            run.clear();
            return Ok(());
        }
        queue!(
            self.out,
            cursor::MoveTo(pos_x as u16, pos_y as u16),
            SetColors(Colors::new(fg.to_crossterm(), bg.to_crossterm())),
            style::Print(run.iter().collect::<String>()),
        )?;
        run.clear();
        Ok(())
    }
}

impl Drop for TermDisplay {
    fn drop(&mut self) {
        let _ = execute!(self.out, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

/// The device has no notion of "transparent"; blank cells land as spaces.
fn visible_glyph(cell: &Cell) -> char {
    if cell.is_blank() { ' ' } else { cell.glyph }
}

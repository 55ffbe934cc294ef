//! Crossterm terminal output for mazer.
//!
//! Provides a [`StyledPrinter`] that writes a (solved) maze grid with one
//! foreground colour per tile kind, using crossterm escape sequences.

use std::io::{self, Write};

use crossterm::{
    queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
};

use mazer::{Grid, Markers, Tile};

/// Foreground colours for each kind of cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct Palette {
    wall: Color,
    floor: Color,
    start: Color,
    end: Color,
    path: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            wall: Color::DarkGrey,
            floor: Color::Reset,
            start: Color::Green,
            end: Color::Red,
            path: Color::Yellow,
        }
    }
}

impl Palette {
    /// Colour for a grid character. The path marker is checked first since
    /// it only exists in rendered grids.
    fn color_for(&self, ch: char, markers: &Markers) -> Color {
        if ch == markers.path {
            return self.path;
        }
        match markers.classify(ch) {
            Tile::Wall => self.wall,
            Tile::Floor => self.floor,
            Tile::Start => self.start,
            Tile::End => self.end,
        }
    }
}

/// Writes maze grids to a terminal with colours.
pub struct StyledPrinter {
    palette: Palette,
    bold_path: bool,
}

impl StyledPrinter {
    /// Create a printer with the default palette.
    pub fn new() -> Self {
        Self {
            palette: Palette::default(),
            bold_path: true,
        }
    }

    /// Configure whether path cells are printed bold.
    pub fn with_bold_path(mut self, enabled: bool) -> Self {
        self.bold_path = enabled;
        self
    }

    /// Write `grid` to `out`. Colours are reset at the end of every row; no
    /// trailing newline is written.
    pub fn write<W: Write>(&self, out: &mut W, grid: &Grid, markers: &Markers) -> io::Result<()> {
        for (y, row) in grid.rows().enumerate() {
            if y > 0 {
                queue!(out, Print('\n'))?;
            }

            let mut current: Option<Color> = None;
            for &ch in row {
                let color = self.palette.color_for(ch, markers);
                if current != Some(color) {
                    queue!(out, SetForegroundColor(color))?;
                    current = Some(color);
                }

                let bold = self.bold_path && ch == markers.path;
                if bold {
                    queue!(out, SetAttribute(Attribute::Bold))?;
                }
                queue!(out, Print(ch))?;
                if bold {
                    queue!(out, SetAttribute(Attribute::NormalIntensity))?;
                }
            }

            queue!(out, ResetColor)?;
        }

        out.flush()
    }

    /// Write `grid` to stdout followed by a newline.
    pub fn print(&self, grid: &Grid, markers: &Markers) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        self.write(&mut stdout, grid, markers)?;
        writeln!(stdout)?;
        stdout.flush()
    }
}

impl Default for StyledPrinter {
    fn default() -> Self {
        Self::new()
    }
}

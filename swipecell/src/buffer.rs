use unicode_width::UnicodeWidthChar;

use crate::rect::Rect;
use crate::style::{Rgb, Style};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
            bold: false,
        }
    }
}

impl Cell {
    pub fn new(ch: char) -> Self {
        Self {
            ch,
            ..Default::default()
        }
    }

    pub fn with_fg(mut self, fg: Rgb) -> Self {
        self.fg = fg;
        self
    }

    pub fn with_bg(mut self, bg: Rgb) -> Self {
        self.bg = bg;
        self
    }
}

#[derive(Debug, Clone)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Buffer {
    pub fn new(width: u16, height: u16) -> Self {
        let cells = vec![Cell::default(); (width as usize) * (height as usize)];
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        if x < self.width && y < self.height {
            Some(&self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        if x < self.width && y < self.height {
            let idx = self.index(x, y);
            Some(&mut self.cells[idx])
        } else {
            None
        }
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if x < self.width && y < self.height {
            let idx = self.index(x, y);
            self.cells[idx] = cell;
        }
    }

    fn index(&self, x: u16, y: u16) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// Write a string starting at (x, y), applying the set fields of `style`
    /// over whatever is already in each cell.
    pub fn set_str(&mut self, x: u16, y: u16, text: &str, style: Style) {
        let mut cx = x;
        for ch in text.chars() {
            let w = ch.width().unwrap_or(0) as u16;
            if w == 0 {
                continue;
            }
            if cx >= self.width {
                break;
            }
            for i in 0..w {
                if let Some(cell) = self.get_mut(cx + i, y) {
                    // Wide characters blank their continuation cell.
                    cell.ch = if i == 0 { ch } else { ' ' };
                    if let Some(fg) = style.foreground {
                        cell.fg = fg;
                    }
                    if let Some(bg) = style.background {
                        cell.bg = bg;
                    }
                    cell.bold = style.bold;
                }
            }
            cx += w;
        }
    }

    /// Copy `src` into `area`, shifted horizontally by `dx` cells.
    /// Anything landing outside `area` is clipped away.
    pub fn blit_shifted(&mut self, src: &Buffer, area: Rect, dx: i32) {
        for sy in 0..src.height.min(area.height) {
            for sx in 0..src.width.min(area.width) {
                let tx = area.x as i32 + sx as i32 + dx;
                if tx < area.x as i32 || tx >= area.right() as i32 {
                    continue;
                }
                if let Some(cell) = src.get(sx, sy) {
                    self.set(tx as u16, area.y + sy, *cell);
                }
            }
        }
    }

    pub fn diff<'a>(&'a self, other: &'a Buffer) -> impl Iterator<Item = (u16, u16, &'a Cell)> {
        self.cells
            .iter()
            .zip(other.cells.iter())
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(move |(i, (cell, _))| {
                let x = (i % self.width as usize) as u16;
                let y = (i / self.width as usize) as u16;
                (x, y, cell)
            })
    }

    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = Cell::default();
        }
    }
}

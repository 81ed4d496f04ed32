// Copyright 2025 the Limelight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared support for the Limelight demos: a text-grid canvas.
//!
//! The runtime only requires a canvas to report its size; everything else a
//! surface can do belongs to the host. This crate's [`TextCanvas`] is the
//! smallest useful host surface: a character grid that entities draw into
//! and the demos print to stdout.

use kurbo::{Rect, Size};
use limelight_scene::Canvas;

/// A character-grid drawing surface, one cell per unit.
#[derive(Debug)]
pub struct TextCanvas {
    columns: usize,
    rows: usize,
    cells: Vec<char>,
}

impl TextCanvas {
    /// Create a grid of the given dimensions, filled with dots.
    pub fn new(columns: usize, rows: usize) -> Self {
        Self {
            columns,
            rows,
            cells: vec!['.'; columns * rows],
        }
    }

    /// Reset every cell for the next frame.
    pub fn clear(&mut self) {
        self.cells.fill('.');
    }

    /// Fill the cells covered by `rect` with `glyph`, clipped to the grid.
    pub fn fill_rect(&mut self, rect: Rect, glyph: char) {
        let rect = rect.intersect(Rect::new(
            0.0,
            0.0,
            self.columns as f64,
            self.rows as f64,
        ));
        if rect.is_zero_area() {
            return;
        }
        let (x0, y0, x1, y1) = (
            rect.x0.floor() as usize,
            rect.y0.floor() as usize,
            rect.x1.ceil() as usize,
            rect.y1.ceil() as usize,
        );
        for row in y0..y1.min(self.rows) {
            for column in x0..x1.min(self.columns) {
                self.cells[row * self.columns + column] = glyph;
            }
        }
    }

    /// Render the grid as one string, one line per row.
    pub fn to_text(&self) -> String {
        let mut text = String::with_capacity((self.columns + 1) * self.rows);
        for row in 0..self.rows {
            for column in 0..self.columns {
                text.push(self.cells[row * self.columns + column]);
            }
            text.push('\n');
        }
        text
    }
}

impl Canvas for TextCanvas {
    fn canvas_size(&self) -> Option<Size> {
        Some(Size::new(self.columns as f64, self.rows as f64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fills_and_prints_the_grid() {
        let mut canvas = TextCanvas::new(4, 3);
        canvas.fill_rect(Rect::new(1.0, 1.0, 3.0, 2.0), '#');
        assert_eq!(canvas.to_text(), "....\n.##.\n....\n");
        canvas.clear();
        assert_eq!(canvas.to_text(), "....\n....\n....\n");
    }

    #[test]
    fn clips_rectangles_to_the_grid() {
        let mut canvas = TextCanvas::new(3, 2);
        canvas.fill_rect(Rect::new(-5.0, -5.0, 50.0, 50.0), '#');
        assert_eq!(canvas.to_text(), "###\n###\n");
        canvas.fill_rect(Rect::new(10.0, 10.0, 20.0, 20.0), 'x');
        assert_eq!(canvas.to_text(), "###\n###\n");
    }
}

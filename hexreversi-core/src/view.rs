//! Text rendering of a board
//!
//! Rows run from the top (most negative r) to the bottom. Each row is
//! padded on both sides so the hexagon is centered; cells are separated by
//! a single space and rows by `\n`, with no trailing newline.

use crate::board::{CellColor, Hex};
use crate::model::ReadonlyModel;
use crate::error::Result;

/// Render a board of `size` using `color_at` to look up each cell
pub fn render_with<F>(size: i32, mut color_at: F) -> String
where
    F: FnMut(Hex) -> CellColor,
{
    let radius = size / 2;
    let mut rows = Vec::with_capacity(size.max(0) as usize);

    for r in -radius..=radius {
        let first = (-radius).max(-radius - r);
        let last = radius.min(radius - r);
        let padding = " ".repeat((size - (last - first) + 1).max(0) as usize);

        let cells: Vec<String> = (first..=last)
            .map(|q| color_at(Hex::new(q, r)).symbol().to_string())
            .collect();

        rows.push(format!("{}{}{}", padding, cells.join(" "), padding));
    }

    rows.join("\n")
}

/// Text view over any read-only model
pub struct TextView<'a, M: ReadonlyModel + ?Sized> {
    model: &'a M,
}

impl<'a, M: ReadonlyModel + ?Sized> TextView<'a, M> {
    pub fn new(model: &'a M) -> Self {
        Self { model }
    }

    /// Render the model's current board
    pub fn render(&self) -> Result<String> {
        let mut failure = None;
        let text = render_with(self.model.board_size(), |hex| {
            match self.model.contents_of(hex) {
                Ok(color) => color,
                Err(e) => {
                    failure.get_or_insert(e);
                    CellColor::Empty
                }
            }
        });

        match failure {
            Some(e) => Err(e),
            None => Ok(text),
        }
    }
}

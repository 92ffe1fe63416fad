use color_eyre::{eyre::eyre, Result};

use crate::api::types::Coord;

/// A dense board-sized array of optional cell values, private to one
/// computation. Reads are total: anything off the board is simply empty, so
/// speculative lookups never need their own bounds checks. Writes are not:
/// marking a cell that does not exist is a bug in the caller.
#[derive(Clone, Debug)]
pub struct Grid<T> {
    width:  i64,
    height: i64,
    cells:  Vec<Option<T>>,
}

impl<T> Grid<T> {
    pub fn new(width: i64, height: i64) -> Self
    where
        T: Clone,
    {
        Grid {
            width,
            height,
            cells: vec![None; (width * height) as usize],
        }
    }

    fn index(&self, coord: Coord) -> Option<usize> {
        if coord.x < 0 || coord.y < 0 || coord.x >= self.width || coord.y >= self.height {
            None
        } else {
            Some((coord.y * self.width + coord.x) as usize)
        }
    }

    pub fn get(&self, coord: Coord) -> Option<&T> {
        self.index(coord).and_then(|index| self.cells[index].as_ref())
    }

    /// # Errors
    ///
    /// Fails when `coord` lies outside the grid.
    pub fn set(&mut self, coord: Coord, value: T) -> Result<()> {
        let index = self.index(coord).ok_or_else(|| {
            eyre!(
                "refusing to write {} outside a {}x{} grid",
                coord,
                self.width,
                self.height
            )
        })?;
        self.cells[index] = Some(value);
        Ok(())
    }

    /// # Errors
    ///
    /// Stops at the first out-of-bounds point and reports it.
    pub fn set_all(&mut self, points: impl IntoIterator<Item = Coord>, value: T) -> Result<()>
    where
        T: Clone,
    {
        for point in points {
            self.set(point, value.clone())?;
        }
        Ok(())
    }
}

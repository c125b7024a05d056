use crate::constants::MESH_MAX_CELLS_PER_AXIS;

/// A lattice vertex of the background mesh.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridPoint {
    pub x: f64,
    pub y: f64,
    pub base_x: f64,
    pub base_y: f64,
    pub z: f64,
}

impl GridPoint {
    fn at(base_x: f64, base_y: f64) -> Self {
        Self {
            x: base_x,
            y: base_y,
            base_x,
            base_y,
            z: 0.0,
        }
    }
}

/// Row-major point lattice covering the viewport plus one cell of overdraw.
///
/// Invariant: `points.len() == rows * cols`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GridModel {
    rows: usize,
    cols: usize,
    points: Vec<GridPoint>,
}

impl GridModel {
    pub fn new(width: f64, height: f64, cell_size: f64) -> Self {
        let mut grid = Self::default();
        grid.rebuild(width, height, cell_size);
        grid
    }

    /// `(rows, cols)` for a viewport. Degenerate sizes collapse to one line;
    /// each axis is capped at `MESH_MAX_CELLS_PER_AXIS` cells.
    pub fn dimensions(width: f64, height: f64, cell_size: f64) -> (usize, usize) {
        if !(cell_size.is_finite() && cell_size > 0.0) {
            return (1, 1);
        }
        let cells = |extent: f64| -> usize {
            if extent.is_finite() && extent > 0.0 {
                (extent / cell_size)
                    .ceil()
                    .min(MESH_MAX_CELLS_PER_AXIS as f64) as usize
            } else {
                0
            }
        };
        (cells(height) + 1, cells(width) + 1)
    }

    pub fn rebuild(&mut self, width: f64, height: f64, cell_size: f64) {
        let (rows, cols) = Self::dimensions(width, height, cell_size);
        let step = if cell_size.is_finite() && cell_size > 0.0 {
            cell_size
        } else {
            0.0
        };
        self.rows = rows;
        self.cols = cols;
        self.points = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                self.points
                    .push(GridPoint::at(col as f64 * step, row as f64 * step));
            }
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn points(&self) -> &[GridPoint] {
        &self.points
    }

    #[inline]
    pub fn points_mut(&mut self) -> &mut [GridPoint] {
        &mut self.points
    }

    #[cfg(test)]
    pub fn row_col(&self, index: usize) -> (usize, usize) {
        let cols = self.cols.max(1);
        (index / cols, index % cols)
    }

    #[cfg(test)]
    pub fn point(&self, row: usize, col: usize) -> Option<&GridPoint> {
        if row < self.rows && col < self.cols {
            self.points.get(row * self.cols + col)
        } else {
            None
        }
    }
}

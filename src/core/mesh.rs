use crate::constants::*;
use crate::core::grid::GridModel;
use crate::core::viewport::Viewport;

/// 2D drawing surface the mesh is stroked onto.
pub trait MeshSurface {
    fn set_size(&mut self, width: u32, height: u32);
    /// Backing store size in pixels.
    fn size(&self) -> (u32, u32);
    fn clear(&mut self, width: f64, height: f64);
    fn set_stroke(&mut self, style: &str, line_width: f64);
    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn stroke(&mut self);
}

#[derive(Clone, Debug, PartialEq)]
pub struct MeshParams {
    pub cell_size: f64,
    pub amplitude: f64,
    pub wave_frequency: f64,
    pub rotation_step: f64,
    pub time_step: f64,
    pub stroke_style: &'static str,
    pub line_width: f64,
}

impl Default for MeshParams {
    fn default() -> Self {
        Self {
            cell_size: MESH_CELL_SIZE,
            amplitude: MESH_AMPLITUDE,
            wave_frequency: MESH_WAVE_FREQUENCY,
            rotation_step: MESH_ROTATION_STEP,
            time_step: MESH_TIME_STEP,
            stroke_style: MESH_STROKE_STYLE,
            line_width: MESH_LINE_WIDTH,
        }
    }
}

/// Phase accumulators. Never wrapped; only their value mod 2π matters.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AnimationPhase {
    pub rotation: f64,
    /// Advanced every frame but not part of the displacement.
    pub time: f64,
}

/// Vertical displacement of the point at `(row, col)` for a rotation phase.
#[inline]
pub fn displacement(rotation: f64, row: usize, col: usize, params: &MeshParams) -> f64 {
    (rotation + col as f64 * params.wave_frequency).sin()
        * (rotation + row as f64 * params.wave_frequency).cos()
        * params.amplitude
}

/// Owns the grid and phases and redraws the wireframe once per `tick`.
#[derive(Clone, Debug)]
pub struct MeshAnimator {
    params: MeshParams,
    phase: AnimationPhase,
    grid: GridModel,
    width: f64,
    height: f64,
}

impl MeshAnimator {
    pub fn new(params: MeshParams, width: f64, height: f64) -> Self {
        let grid = GridModel::new(width, height, params.cell_size);
        Self {
            params,
            phase: AnimationPhase::default(),
            grid,
            width,
            height,
        }
    }

    /// Size the surface to the viewport, then rebuild the grid from the
    /// surface's new size.
    pub fn resize<S: MeshSurface>(&mut self, surface: &mut S, viewport: Viewport) {
        let w = viewport.width.max(0.0) as u32;
        let h = viewport.height.max(0.0) as u32;
        surface.set_size(w, h);
        let (sw, sh) = surface.size();
        self.width = sw as f64;
        self.height = sh as f64;
        self.grid
            .rebuild(self.width, self.height, self.params.cell_size);
    }

    pub fn advance(&mut self) {
        self.phase.rotation += self.params.rotation_step;
        self.phase.time += self.params.time_step;
    }

    pub fn displace(&mut self) {
        let rotation = self.phase.rotation;
        let cols = self.grid.cols().max(1);
        let params = &self.params;
        for (i, point) in self.grid.points_mut().iter_mut().enumerate() {
            point.z = displacement(rotation, i / cols, i % cols, params);
        }
    }

    /// Stroke one polyline per row (displaced in y) and per column
    /// (displaced in x).
    pub fn render<S: MeshSurface>(&self, surface: &mut S) {
        surface.set_stroke(self.params.stroke_style, self.params.line_width);
        let (rows, cols) = (self.grid.rows(), self.grid.cols());
        let points = self.grid.points();
        if self.grid.is_empty() || points.len() != rows * cols {
            return;
        }

        for row in 0..rows {
            surface.begin_path();
            for col in 0..cols {
                let p = &points[row * cols + col];
                if col == 0 {
                    surface.move_to(p.x, p.y + p.z);
                } else {
                    surface.line_to(p.x, p.y + p.z);
                }
            }
            surface.stroke();
        }

        for col in 0..cols {
            surface.begin_path();
            for row in 0..rows {
                let p = &points[row * cols + col];
                if row == 0 {
                    surface.move_to(p.x + p.z, p.y);
                } else {
                    surface.line_to(p.x + p.z, p.y);
                }
            }
            surface.stroke();
        }
    }

    pub fn tick<S: MeshSurface>(&mut self, surface: &mut S) {
        surface.clear(self.width, self.height);
        self.advance();
        self.displace();
        self.render(surface);
    }

    #[inline]
    pub fn grid(&self) -> &GridModel {
        &self.grid
    }

    #[cfg(test)]
    pub fn phase(&self) -> AnimationPhase {
        self.phase
    }

    #[cfg(test)]
    pub fn set_phase(&mut self, phase: AnimationPhase) {
        self.phase = phase;
    }

    #[cfg(test)]
    pub fn params(&self) -> &MeshParams {
        &self.params
    }

    #[cfg(test)]
    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }
}

use crate::constants::MESH_CANVAS_ID;
use crate::core::{MeshAnimator, MeshParams, MeshSurface, Viewport};
use wasm_bindgen::JsCast;
use web_sys as web;

/// `MeshSurface` over the background canvas' 2D context.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("getContext failed: {:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        Ok(Self { canvas, ctx })
    }
}

impl MeshSurface for CanvasSurface {
    fn set_size(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn size(&self) -> (u32, u32) {
        (self.canvas.width(), self.canvas.height())
    }

    fn clear(&mut self, width: f64, height: f64) {
        self.ctx.clear_rect(0.0, 0.0, width, height);
    }

    fn set_stroke(&mut self, style: &str, line_width: f64) {
        self.ctx.set_stroke_style_str(style);
        self.ctx.set_line_width(line_width);
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ctx.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ctx.line_to(x, y);
    }

    fn stroke(&mut self) {
        self.ctx.stroke();
    }
}

/// The background wireframe: animator plus the canvas it draws on.
pub struct MeshCanvas {
    animator: MeshAnimator,
    surface: CanvasSurface,
}

impl MeshCanvas {
    pub fn from_document(document: &web::Document, viewport: Viewport) -> anyhow::Result<Self> {
        let canvas = document
            .get_element_by_id(MESH_CANVAS_ID)
            .ok_or_else(|| anyhow::anyhow!("missing #{}", MESH_CANVAS_ID))?
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        let mut surface = CanvasSurface::new(canvas)?;
        // Laid out once, by `resize`, from the surface's actual size.
        let mut animator = MeshAnimator::new(MeshParams::default(), 0.0, 0.0);
        animator.resize(&mut surface, viewport);
        let grid = animator.grid();
        log::info!(
            "[mesh] grid {}x{} ({} points) for {}x{}",
            grid.rows(),
            grid.cols(),
            grid.len(),
            viewport.width,
            viewport.height
        );
        Ok(Self { animator, surface })
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.animator.resize(&mut self.surface, viewport);
        let grid = self.animator.grid();
        log::debug!("[mesh] rebuilt grid {}x{}", grid.rows(), grid.cols());
    }

    pub fn frame(&mut self) {
        self.animator.tick(&mut self.surface);
    }
}

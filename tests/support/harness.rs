// Shared host-side harness: mirrors the crate's `constants` and `core`
// module paths by including the pure-Rust sources, plus recording fakes for
// the tween sink and drawing surface.

mod constants {
    include!(concat!(env!("CARGO_MANIFEST_DIR"), "/src/constants.rs"));
}

mod core {
    pub mod grid {
        include!(concat!(env!("CARGO_MANIFEST_DIR"), "/src/core/grid.rs"));
    }
    pub mod interaction {
        include!(concat!(env!("CARGO_MANIFEST_DIR"), "/src/core/interaction.rs"));
    }
    pub mod mesh {
        include!(concat!(env!("CARGO_MANIFEST_DIR"), "/src/core/mesh.rs"));
    }
    pub mod motion {
        include!(concat!(env!("CARGO_MANIFEST_DIR"), "/src/core/motion.rs"));
    }
    pub mod reveal {
        include!(concat!(env!("CARGO_MANIFEST_DIR"), "/src/core/reveal.rs"));
    }
    pub mod scheduler {
        include!(concat!(env!("CARGO_MANIFEST_DIR"), "/src/core/scheduler.rs"));
    }
    pub mod targets {
        include!(concat!(env!("CARGO_MANIFEST_DIR"), "/src/core/targets.rs"));
    }
    pub mod tween {
        include!(concat!(env!("CARGO_MANIFEST_DIR"), "/src/core/tween.rs"));
    }
    pub mod viewport {
        include!(concat!(env!("CARGO_MANIFEST_DIR"), "/src/core/viewport.rs"));
    }
}

mod recording {
    use crate::core::mesh::MeshSurface;
    use crate::core::targets::ElementId;
    use crate::core::tween::{TweenSink, TweenVars};

    #[derive(Clone, Debug, PartialEq)]
    pub enum Call {
        To(Vec<ElementId>, TweenVars),
        From(Vec<ElementId>, TweenVars),
        FromTo(Vec<ElementId>, TweenVars, TweenVars),
        ScrollTo(f64, TweenVars),
    }

    #[derive(Default)]
    pub struct RecordingSink {
        pub calls: Vec<Call>,
    }

    impl RecordingSink {
        pub fn to_calls(&self) -> Vec<(Vec<ElementId>, TweenVars)> {
            self.calls
                .iter()
                .filter_map(|c| match c {
                    Call::To(t, v) => Some((t.clone(), v.clone())),
                    _ => None,
                })
                .collect()
        }
    }

    impl TweenSink for RecordingSink {
        fn to(&mut self, targets: &[ElementId], vars: &TweenVars) {
            assert!(!targets.is_empty(), "empty target list reached the sink");
            self.calls.push(Call::To(targets.to_vec(), vars.clone()));
        }
        fn from(&mut self, targets: &[ElementId], vars: &TweenVars) {
            assert!(!targets.is_empty(), "empty target list reached the sink");
            self.calls.push(Call::From(targets.to_vec(), vars.clone()));
        }
        fn from_to(&mut self, targets: &[ElementId], from: &TweenVars, to: &TweenVars) {
            assert!(!targets.is_empty(), "empty target list reached the sink");
            self.calls
                .push(Call::FromTo(targets.to_vec(), from.clone(), to.clone()));
        }
        fn scroll_to(&mut self, y: f64, vars: &TweenVars) {
            self.calls.push(Call::ScrollTo(y, vars.clone()));
        }
    }

    #[derive(Clone, Debug, PartialEq)]
    pub enum Draw {
        SetSize(u32, u32),
        Clear(f64, f64),
        Style(String, f64),
        Begin,
        MoveTo(f64, f64),
        LineTo(f64, f64),
        Stroke,
    }

    #[derive(Default)]
    pub struct RecordingSurface {
        pub width: u32,
        pub height: u32,
        pub ops: Vec<Draw>,
    }

    impl RecordingSurface {
        pub fn clear_ops(&mut self) {
            self.ops.clear();
        }

        /// Stroked polylines in draw order.
        pub fn polylines(&self) -> Vec<Vec<(f64, f64)>> {
            let mut lines = Vec::new();
            let mut current: Vec<(f64, f64)> = Vec::new();
            for op in &self.ops {
                match op {
                    Draw::Begin => current.clear(),
                    Draw::MoveTo(x, y) | Draw::LineTo(x, y) => current.push((*x, *y)),
                    Draw::Stroke => lines.push(std::mem::take(&mut current)),
                    _ => {}
                }
            }
            lines
        }
    }

    impl MeshSurface for RecordingSurface {
        fn set_size(&mut self, width: u32, height: u32) {
            self.width = width;
            self.height = height;
            self.ops.push(Draw::SetSize(width, height));
        }
        fn size(&self) -> (u32, u32) {
            (self.width, self.height)
        }
        fn clear(&mut self, width: f64, height: f64) {
            self.ops.push(Draw::Clear(width, height));
        }
        fn set_stroke(&mut self, style: &str, line_width: f64) {
            self.ops.push(Draw::Style(style.to_string(), line_width));
        }
        fn begin_path(&mut self) {
            self.ops.push(Draw::Begin);
        }
        fn move_to(&mut self, x: f64, y: f64) {
            self.ops.push(Draw::MoveTo(x, y));
        }
        fn line_to(&mut self, x: f64, y: f64) {
            self.ops.push(Draw::LineTo(x, y));
        }
        fn stroke(&mut self) {
            self.ops.push(Draw::Stroke);
        }
    }
}

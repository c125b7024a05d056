//! Target-independent effect logic.
//!
//! Nothing here touches the DOM: elements are `ElementId` handles, tweens go
//! through [`tween::TweenSink`] and drawing through [`mesh::MeshSurface`], so
//! every behavior runs (and is tested) on the host.

pub mod grid;
pub mod interaction;
pub mod mesh;
pub mod motion;
pub mod reveal;
pub mod scheduler;
pub mod targets;
pub mod tween;
pub mod viewport;

pub use grid::{GridModel, GridPoint};
pub use mesh::{MeshAnimator, MeshParams, MeshSurface};
pub use scheduler::{
    CancelToken, DebouncePoll, DebounceTicket, Debouncer, FrameCoalescer, FrameDriver, LoopCommand,
    PageLifecycle,
};
pub use targets::{ElementId, Role, TargetTable};
pub use tween::{Ease, TweenSink, TweenVars};
pub use viewport::{Rect, Viewport};

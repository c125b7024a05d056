use std::cell::Cell;
use std::rc::Rc;

/// Collapses a burst of events into a single per-frame recomputation.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameCoalescer {
    pending: bool,
}

impl FrameCoalescer {
    /// Returns `true` when the caller should schedule a frame.
    #[inline]
    pub fn request(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    #[inline]
    pub fn complete(&mut self) {
        self.pending = false;
    }

    #[cfg(test)]
    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DebounceTicket {
    generation: u64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DebouncePoll {
    /// The quiet window after the latest trigger has elapsed.
    Fire,
    /// Poll again after this many milliseconds.
    Wait(f64),
    /// Superseded by a later trigger, or already fired.
    Stale,
}

/// Trailing-edge debounce: fires once the triggers stop for `delay_ms`.
#[derive(Clone, Debug)]
pub struct Debouncer {
    delay_ms: f64,
    generation: u64,
    due_ms: Option<f64>,
}

impl Debouncer {
    pub fn new(delay_ms: f64) -> Self {
        Self {
            delay_ms,
            generation: 0,
            due_ms: None,
        }
    }

    #[inline]
    pub fn delay_ms(&self) -> f64 {
        self.delay_ms
    }

    /// Restart the quiet window at `now_ms`. Older tickets become stale.
    pub fn trigger(&mut self, now_ms: f64) -> DebounceTicket {
        self.generation = self.generation.wrapping_add(1);
        self.due_ms = Some(now_ms + self.delay_ms);
        DebounceTicket {
            generation: self.generation,
        }
    }

    /// `Fire` exactly once for the latest ticket, at or after its deadline.
    /// A timer that wakes early gets the remaining wait instead.
    pub fn poll(&mut self, ticket: DebounceTicket, now_ms: f64) -> DebouncePoll {
        if ticket.generation != self.generation {
            return DebouncePoll::Stale;
        }
        match self.due_ms {
            Some(due) if now_ms >= due => {
                self.due_ms = None;
                DebouncePoll::Fire
            }
            Some(due) => DebouncePoll::Wait(due - now_ms),
            None => DebouncePoll::Stale,
        }
    }
}

/// Shared stop flag for a scheduled loop.
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    cancelled: Rc<Cell<bool>>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

#[derive(Debug, Default)]
pub struct FrameDriver {
    token: CancelToken,
    frames: u64,
}

impl FrameDriver {
    pub fn new(token: CancelToken) -> Self {
        Self { token, frames: 0 }
    }

    /// Run one frame. Returns whether the next frame should be requested.
    pub fn step(&mut self, frame: impl FnOnce()) -> bool {
        if self.token.is_cancelled() {
            return false;
        }
        frame();
        self.frames += 1;
        !self.token.is_cancelled()
    }

    #[cfg(test)]
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

/// What a page transition means for a running frame loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopCommand {
    Stop,
    Restart,
    Keep,
}

/// Tracks `pagehide`/`pageshow` so a loop stopped for the back/forward
/// cache starts again when the page is restored.
#[derive(Clone, Copy, Debug, Default)]
pub struct PageLifecycle {
    stopped: bool,
    cached: bool,
}

impl PageLifecycle {
    pub fn on_hide(&mut self, persisted: bool) -> LoopCommand {
        if self.stopped {
            return LoopCommand::Keep;
        }
        self.stopped = true;
        self.cached = persisted;
        LoopCommand::Stop
    }

    pub fn on_show(&mut self, persisted: bool) -> LoopCommand {
        if !(persisted && self.stopped && self.cached) {
            return LoopCommand::Keep;
        }
        self.stopped = false;
        self.cached = false;
        LoopCommand::Restart
    }
}

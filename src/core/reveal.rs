use crate::constants::*;
use crate::core::scheduler::FrameCoalescer;
use crate::core::targets::{Role, TargetTable};
use crate::core::tween::{Ease, TweenSink, TweenVars};

/// Intro tweens for the hero block, played once on load.
pub fn hero_intro_steps() -> [(Role, TweenVars); 4] {
    [
        (
            Role::HeroLabel,
            TweenVars::over(0.8).opacity(0.0).y(20.0).delay(0.2),
        ),
        (
            Role::HeroHeading,
            TweenVars::over(1.0).opacity(0.0).y(40.0).delay(0.4),
        ),
        (
            Role::HeroText,
            TweenVars::over(0.8).opacity(0.0).y(30.0).delay(0.6),
        ),
        (
            Role::HeroImage,
            TweenVars::over(1.0)
                .opacity(0.0)
                .scale(0.8)
                .delay(1.0)
                .ease(Ease::BackOut),
        ),
    ]
}

/// Returns how many steps had targets.
pub fn play_hero_intro(table: &TargetTable, sink: &mut impl TweenSink) -> usize {
    let mut played = 0;
    for (role, vars) in hero_intro_steps().iter() {
        let targets = table.get(*role);
        if targets.is_empty() {
            continue;
        }
        sink.from(targets, vars);
        played += 1;
    }
    played
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionReveal {
    pub trigger: Role,
    pub targets: Role,
    pub stagger: Option<f64>,
}

pub const SECTION_REVEALS: [SectionReveal; 2] = [
    SectionReveal {
        trigger: Role::Collection,
        targets: Role::SectionIntro,
        stagger: None,
    },
    SectionReveal {
        trigger: Role::InfoSection,
        targets: Role::InfoBlock,
        stagger: Some(REVEAL_STAGGER),
    },
];

/// Register the one-shot scroll reveals. Returns how many were registered.
pub fn play_section_reveals(table: &TargetTable, sink: &mut impl TweenSink) -> usize {
    let mut registered = 0;
    for reveal in SECTION_REVEALS.iter() {
        let Some(trigger) = table.first(reveal.trigger) else {
            continue;
        };
        let targets = table.get(reveal.targets);
        if targets.is_empty() {
            continue;
        }
        let mut vars = TweenVars::over(REVEAL_DURATION)
            .opacity(0.0)
            .y(REVEAL_OFFSET_Y)
            .scroll_trigger(trigger, REVEAL_START);
        if let Some(s) = reveal.stagger {
            vars = vars.stagger(s);
        }
        sink.from(targets, &vars);
        registered += 1;
    }
    registered
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeaderTint {
    Top,
    Scrolled,
}

impl HeaderTint {
    pub fn for_scroll(scroll_y: f64) -> Self {
        if scroll_y > HEADER_SCROLL_THRESHOLD {
            HeaderTint::Scrolled
        } else {
            HeaderTint::Top
        }
    }

    pub fn background(self) -> &'static str {
        match self {
            HeaderTint::Top => HEADER_BG_TOP,
            HeaderTint::Scrolled => HEADER_BG_SCROLLED,
        }
    }
}

/// Recolors the header at most once per display frame.
#[derive(Clone, Debug, Default)]
pub struct HeaderTracker {
    coalescer: FrameCoalescer,
    tint: Option<HeaderTint>,
    updates: u64,
}

impl HeaderTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` when a frame must be requested for this scroll event.
    pub fn on_scroll(&mut self) -> bool {
        self.coalescer.request()
    }

    /// Run the pending recomputation for the current scroll position.
    pub fn on_frame(
        &mut self,
        scroll_y: f64,
        table: &TargetTable,
        sink: &mut impl TweenSink,
    ) -> HeaderTint {
        let tint = HeaderTint::for_scroll(scroll_y);
        let header = table.get(Role::Header);
        if !header.is_empty() {
            let vars = TweenVars::over(HEADER_TINT_DURATION).background(tint.background());
            sink.to(header, &vars);
        }
        self.tint = Some(tint);
        self.updates += 1;
        self.coalescer.complete();
        tint
    }

    #[cfg(test)]
    pub fn is_pending(&self) -> bool {
        self.coalescer.is_pending()
    }

    #[inline]
    pub fn tint(&self) -> Option<HeaderTint> {
        self.tint
    }

    #[inline]
    pub fn updates(&self) -> u64 {
        self.updates
    }
}

use fnv::FnvHashMap;
use smallvec::SmallVec;

/// Opaque handle to a page element resolved by the web layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    CursorDot,
    CursorOutline,
    Interactive,
    Shape,
    Parallax1,
    Parallax2,
    Parallax3,
    HeroLabel,
    HeroHeading,
    HeroText,
    HeroImage,
    HeroSection,
    Particle,
    TiltCard,
    PrimaryButton,
    Collection,
    SectionIntro,
    InfoSection,
    InfoBlock,
    Header,
    Anchor,
    BadgeSection,
    BadgeCard,
}

impl Role {
    pub const ALL: &'static [Role] = &[
        Role::CursorDot,
        Role::CursorOutline,
        Role::Interactive,
        Role::Shape,
        Role::Parallax1,
        Role::Parallax2,
        Role::Parallax3,
        Role::HeroLabel,
        Role::HeroHeading,
        Role::HeroText,
        Role::HeroImage,
        Role::HeroSection,
        Role::Particle,
        Role::TiltCard,
        Role::PrimaryButton,
        Role::Collection,
        Role::SectionIntro,
        Role::InfoSection,
        Role::InfoBlock,
        Role::Header,
        Role::Anchor,
        Role::BadgeSection,
        Role::BadgeCard,
    ];

    pub fn selector(self) -> &'static str {
        match self {
            Role::CursorDot => ".cursor-dot",
            Role::CursorOutline => ".cursor-outline",
            Role::Interactive => "a, button, .card, .hero-image-container",
            Role::Shape => ".shape, .floating-element",
            Role::Parallax1 => ".shape-1, .element-1",
            Role::Parallax2 => ".shape-2, .element-2",
            Role::Parallax3 => ".shape-3, .element-3",
            Role::HeroLabel => ".hero-label",
            Role::HeroHeading => ".hero-heading",
            Role::HeroText => ".hero-text",
            Role::HeroImage => ".hero-image-container",
            Role::HeroSection => ".hero",
            Role::Particle => ".particle",
            Role::TiltCard => "[data-tilt]",
            Role::PrimaryButton => ".btn-primary",
            Role::Collection => ".collection",
            Role::SectionIntro => ".section-intro",
            Role::InfoSection => ".info-section",
            Role::InfoBlock => ".info-block",
            Role::Header => ".main-header",
            Role::Anchor => "a[href^=\"#\"]",
            Role::BadgeSection => ".badges-section",
            Role::BadgeCard => ".badge-card",
        }
    }

    /// Roles queried once with `querySelector` rather than `querySelectorAll`.
    pub fn is_unique(self) -> bool {
        matches!(
            self,
            Role::CursorDot
                | Role::CursorOutline
                | Role::HeroSection
                | Role::Header
                | Role::Collection
                | Role::InfoSection
                | Role::BadgeSection
        )
    }
}

pub type TargetList = SmallVec<[ElementId; 4]>;

/// Injected element handles for every role. Roles without matches stay empty.
#[derive(Clone, Debug, Default)]
pub struct TargetTable {
    by_role: FnvHashMap<Role, TargetList>,
}

impl TargetTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, role: Role, id: ElementId) {
        let list = self.by_role.entry(role).or_default();
        if role.is_unique() && !list.is_empty() {
            return;
        }
        if !list.contains(&id) {
            list.push(id);
        }
    }

    #[cfg(test)]
    pub fn with(mut self, role: Role, ids: &[ElementId]) -> Self {
        for id in ids {
            self.insert(role, *id);
        }
        self
    }

    #[inline]
    pub fn get(&self, role: Role) -> &[ElementId] {
        self.by_role.get(&role).map(|l| l.as_slice()).unwrap_or(&[])
    }

    #[inline]
    pub fn first(&self, role: Role) -> Option<ElementId> {
        self.get(role).first().copied()
    }

    pub fn total(&self) -> usize {
        self.by_role.values().map(|l| l.len()).sum()
    }
}

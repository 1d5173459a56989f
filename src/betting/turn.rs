/// Which side is to act at a node of the betting tree.
///
/// The hero maximises the hero-relative outcome, the villain minimises it.
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
pub enum Turn {
    Hero,
    Villain,
}

impl Turn {
    /// The side acting after this one.
    pub const fn other(&self) -> Self {
        match self {
            Self::Hero => Self::Villain,
            Self::Villain => Self::Hero,
        }
    }
    pub const fn is_hero(&self) -> bool {
        matches!(self, Self::Hero)
    }
}

impl std::fmt::Display for Turn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Hero => write!(f, "hero"),
            Self::Villain => write!(f, "villain"),
        }
    }
}

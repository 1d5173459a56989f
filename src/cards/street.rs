use crate::Arbitrary;

/// The four betting rounds of a hand.
///
/// Each street reveals more community cards and resets the per-street
/// raise cap. The search never looks past the current street; later
/// streets only enter through the continuation-value projection.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Default)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum Street {
    #[default]
    Pref = 0isize,
    Flop = 1isize,
    Turn = 2isize,
    Rive = 3isize,
}

impl Street {
    /// All four streets in order.
    pub const fn all() -> [Self; 4] {
        [Self::Pref, Self::Flop, Self::Turn, Self::Rive]
    }
    /// Position in the hand, 0 for preflop.
    pub const fn index(&self) -> usize {
        *self as usize
    }
    /// The following street. Panics on river.
    pub const fn next(&self) -> Self {
        match self {
            Self::Pref => Self::Flop,
            Self::Flop => Self::Turn,
            Self::Turn => Self::Rive,
            Self::Rive => panic!("terminal"),
        }
    }
    /// Streets still to come after this one.
    pub const fn n_remaining(&self) -> usize {
        crate::N_STREETS - 1 - self.index()
    }
    /// Community cards visible on this street.
    pub const fn n_public(&self) -> usize {
        match self {
            Self::Pref => 0,
            Self::Flop => 3,
            Self::Turn => 4,
            Self::Rive => 5,
        }
    }
    /// Human-readable name.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Pref => "Preflop",
            Self::Flop => "Flop",
            Self::Turn => "Turn",
            Self::Rive => "River",
        }
    }
}

impl TryFrom<usize> for Street {
    type Error = anyhow::Error;
    /// Street from the number of visible community cards.
    fn try_from(n: usize) -> Result<Self, Self::Error> {
        match n {
            0 => Ok(Self::Pref),
            3 => Ok(Self::Flop),
            4 => Ok(Self::Turn),
            5 => Ok(Self::Rive),
            x => Err(anyhow::anyhow!("no street shows {} community cards", x)),
        }
    }
}

impl std::fmt::Display for Street {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Pref => write!(f, "preflop"),
            Self::Flop => write!(f, "flop"),
            Self::Turn => write!(f, "turn"),
            Self::Rive => write!(f, "river"),
        }
    }
}

impl TryFrom<&str> for Street {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_uppercase().chars().next() {
            Some('P') => Ok(Self::Pref),
            Some('F') => Ok(Self::Flop),
            Some('T') => Ok(Self::Turn),
            Some('R') => Ok(Self::Rive),
            _ => Err(anyhow::anyhow!("invalid street: {}", s)),
        }
    }
}

impl Arbitrary for Street {
    fn random() -> Self {
        match rand::random_range(0..4) {
            0 => Self::Pref,
            1 => Self::Flop,
            2 => Self::Turn,
            _ => Self::Rive,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remaining_streets() {
        assert_eq!(Street::Pref.n_remaining(), 3);
        assert_eq!(Street::Rive.n_remaining(), 0);
    }

    #[test]
    fn parses_names() {
        assert_eq!(Street::try_from("preflop").unwrap(), Street::Pref);
        assert_eq!(Street::try_from("river").unwrap(), Street::Rive);
        assert!(Street::try_from("showdown").is_err());
        assert_eq!(Street::try_from(4usize).unwrap(), Street::Turn);
    }
}

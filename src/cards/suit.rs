/// Card suit: clubs, diamonds, hearts, spades.
///
/// Only suit *matches* matter for hand values. The ordering is arbitrary
/// but fixes the card index layout inside a [`Hand`](super::hand::Hand).
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Suit {
    #[default]
    C = 0,
    D = 1,
    H = 2,
    S = 3,
}

impl Suit {
    /// All four suits in canonical order.
    pub const fn all() -> [Suit; 4] {
        [Suit::C, Suit::D, Suit::H, Suit::S]
    }
}

/// u8 isomorphism
impl From<u8> for Suit {
    fn from(n: u8) -> Suit {
        match n {
            0 => Suit::C,
            1 => Suit::D,
            2 => Suit::H,
            3 => Suit::S,
            _ => unreachable!("invalid suit"),
        }
    }
}
impl From<Suit> for u8 {
    fn from(s: Suit) -> u8 {
        s as u8
    }
}

/// u64 mask selecting every card of this suit in a Hand
impl From<Suit> for u64 {
    fn from(s: Suit) -> u64 {
        match s {
            Suit::C => 0x0001111111111111,
            Suit::D => 0x0002222222222222,
            Suit::H => 0x0004444444444444,
            Suit::S => 0x0008888888888888,
        }
    }
}

/// str isomorphism
impl TryFrom<&str> for Suit {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "c" | "♣" => Ok(Suit::C),
            "d" | "♦" => Ok(Suit::D),
            "h" | "♥" => Ok(Suit::H),
            "s" | "♠" => Ok(Suit::S),
            _ => Err(anyhow::anyhow!("invalid suit str: {}", s)),
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Suit::C => write!(f, "c"),
            Suit::D => write!(f, "d"),
            Suit::H => write!(f, "h"),
            Suit::S => write!(f, "s"),
        }
    }
}

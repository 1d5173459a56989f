use crate::Chips;

/// A betting decision in fixed-limit play.
///
/// Checking is a call of zero, so there is no separate variant. A raise
/// carries the chips added on top of the call: the street's fixed
/// increment, or less when a stack only covers an all-in.
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq, Ord, PartialOrd)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum Action {
    Fold,
    Call,
    Raise(Chips),
}

impl Action {
    /// True if this is a raise.
    pub fn is_aggro(&self) -> bool {
        matches!(self, Action::Raise(_))
    }
    /// True if this is a fold.
    pub fn is_fold(&self) -> bool {
        matches!(self, Action::Fold)
    }
    /// Tie-break precedence: Raise over Call over Fold.
    pub fn precedence(&self) -> usize {
        match self {
            Action::Fold => 0,
            Action::Call => 1,
            Action::Raise(_) => 2,
        }
    }
    /// Compact symbol for logs (e.g., "C", "R20").
    pub fn symbol(&self) -> String {
        match self {
            Action::Fold => format!("F"),
            Action::Call => format!("C"),
            Action::Raise(n) => format!("R{}", n),
        }
    }
    pub fn label(&self) -> &'static str {
        match self {
            Action::Fold => "Fold",
            Action::Call => "Call",
            Action::Raise(_) => "Raise",
        }
    }
}

impl TryFrom<&str> for Action {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.trim().to_uppercase();
        match s.split_at(s.len().min(1)) {
            ("F", "") => Ok(Action::Fold),
            ("C", "") | ("X", "") => Ok(Action::Call),
            ("R", n) => Ok(Action::Raise(n.parse()?)),
            _ => Err(anyhow::anyhow!("invalid action: {}", s)),
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Action::Raise(n) => write!(f, "{} {}", self.label(), n),
            _ => write!(f, "{}", self.label()),
        }
    }
}

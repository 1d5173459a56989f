use crate::Utility;
use crate::betting::Action;
use crate::betting::RaiseCapState;

/// The chosen action together with the value of every root alternative.
#[derive(Debug, Clone, Copy, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Decision {
    pub state: RaiseCapState,
    pub action: Action,
    pub value: Utility,
    pub fold: Utility,
    pub call: Utility,
    pub raise: Option<Utility>,
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{:<6} {:>8.2}  (F {:>8.2} C {:>8.2} R {:>8})",
            self.action.symbol(),
            self.value,
            self.fold,
            self.call,
            self.raise
                .map(|r| format!("{:.2}", r))
                .unwrap_or_else(|| String::from("-")),
        )
    }
}

use super::event::Event;
use crate::betting::Action;

/// Anything that can sit at a heads-up limit table.
///
/// The table tells each player what happens through [`Event`]s, always
/// from that player's own point of view, and asks for a decision among
/// the legal actions when it is their turn.
pub trait Player {
    /// Pick one of `legal`. Raises carry the exact amount offered.
    fn decide(&mut self, legal: &[Action]) -> anyhow::Result<Action>;
    /// Observe something that happened at the table.
    fn notify(&mut self, event: &Event) -> anyhow::Result<()>;
}

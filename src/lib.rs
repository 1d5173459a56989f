//! Alpha-beta decision engine for heads-up Limit Hold'em.
//!
//! The engine searches the remaining betting actions of the current street,
//! scores every street-ending node with a continuation-value model, and
//! sharpens that model across hands with an online learning store.
//!
//! ## Modules
//!
//! - [`cards`]: card primitives, hand evaluation, observations
//! - [`betting`]: raise-cap state, raise schedule, actions
//! - [`equity`]: preflop lookup table and the equity oracle seam
//! - [`learning`]: win/loss and bet-level statistics
//! - [`search`]: continuation-value model and alpha-beta minimax
//! - [`players`]: the agent, its event mirror, and sparring partners
//! - [`gameroom`]: a heads-up limit dealer for self-play

pub mod betting;
pub mod cards;
pub mod equity;
pub mod gameroom;
pub mod learning;
pub mod players;
pub mod search;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Stack sizes and bet amounts in chips.
pub type Chips = i32;
/// Expected monetary outcomes relative to the hero.
pub type Utility = f32;
/// Win probabilities, blend weights, and sampling distributions.
pub type Probability = f32;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and Monte Carlo sampling.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// TABLE PARAMETERS
// ============================================================================
/// Number of players at the table.
pub const N: usize = 2;
/// Starting stack size in chips.
pub const STACK: Chips = 1000;
/// Small blind amount.
pub const S_BLIND: Chips = 10;
/// Big blind amount. Posting it counts as the first raise of preflop.
pub const B_BLIND: Chips = 20;

// ============================================================================
// LIMIT STRUCTURE
// Raise caps bound both the real game and the search tree.
// ============================================================================
/// Betting rounds per hand.
pub const N_STREETS: usize = 4;
/// Maximum raises within one street, both players combined.
pub const RAISES_PER_STREET: u8 = 4;
/// Maximum raises per player across the whole hand.
pub const RAISES_PER_ROUND: u8 = 4;
/// Fixed raise increment on the preflop.
pub const RAISE_PREFLOP: Chips = 20;
/// Fixed raise increment on the flop.
pub const RAISE_FLOP: Chips = 20;
/// Fixed raise increment on the turn.
pub const RAISE_TURN: Chips = 40;
/// Fixed raise increment on the river.
pub const RAISE_RIVER: Chips = 40;

// ============================================================================
// HAND STRENGTH
// ============================================================================
/// Monte Carlo trials per postflop equity estimate.
pub const EQUITY_TRIALS: usize = 250;

// ============================================================================
// OPPONENT MODELLING
// Learned statistics only override closed-form estimates after warm-up.
// ============================================================================
/// Completed hands required before learned statistics are trusted.
pub const WARMUP_HANDS: usize = 100;
/// Weight (β) of the opponent-tendency heuristic against hand strength.
/// Zero means pure hand strength.
pub const TENDENCY_WEIGHT: Probability = 0.0;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}

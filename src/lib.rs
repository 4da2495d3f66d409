//! Texas Hold'Em hand evaluation and Monte Carlo equity estimation.
//!
//! The `cards` module models cards, decks, and hand strength on compact
//! bit representations. The `equity` module samples unseen cards to
//! estimate win/tie/loss probabilities for a hero hand against any
//! number of opponents, enumerates outs, and assembles wire-ready
//! reports.

pub mod cards;
pub mod equity;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and Monte Carlo sampling.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// SIMULATION PARAMETERS
// ============================================================================
/// Monte Carlo trials per equity estimate.
pub const DEFAULT_TRIALS: usize = 10_000;
/// Opponent count assumed when a request leaves it unspecified.
pub const DEFAULT_RIVALS: usize = 1;
/// Opponent counts swept in every report, merged with the requested count.
pub const SWEEP_RIVALS: [usize; 4] = [1, 2, 3, 5];

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging on stderr, keeping stdout clean for reports.
pub fn log() {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        log::LevelFilter::Info,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}

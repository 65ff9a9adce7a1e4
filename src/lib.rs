//! Split prediction for imperfect-information legion stacks.
//!
//! Each opposing player's legions form a binary tree of splits. Every
//! node holds what we believe a legion contained at some point in time,
//! and certainty learned anywhere in the tree is pushed up to the parent
//! and back down through re-derived splits until nothing new is learned.
pub mod combos;
pub mod creature;
pub mod error;
pub mod forest;
pub mod legion;
pub mod split;

pub use error::PredictError;
pub use error::Result;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Game turn on which a legion was created or split.
pub type Turn = u32;
/// Legion marker label, e.g. "Rd01". Not unique across the life of a tree.
pub type Marker = String;
/// Kill value used to rank creatures and score split hypotheses.
pub type Points = u32;

// ============================================================================
// GAME PARAMETERS
// ============================================================================
/// Tallest legal legion. Only the starting legion is ever this tall.
pub const MAX_HEIGHT: usize = 8;
/// A legion this tall must split before it may recruit again.
pub const MAX_RECRUIT_HEIGHT: usize = 7;
/// The starting legion always splits 4-4, one lord per side.
pub const INITIAL_SPLIT: usize = 4;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging at `level`, plus a DEBUG file logger
/// under `logs/` when `file` is set.
#[cfg(feature = "cli")]
pub fn log(level: log::LevelFilter, file: bool) -> anyhow::Result<()> {
    use anyhow::Context;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let term = simplelog::TermLogger::new(
        level,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    let mut loggers: Vec<Box<dyn simplelog::SharedLogger>> = vec![term];
    if file {
        std::fs::create_dir_all("logs").context("create logs directory")?;
        let time = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .context("time moves slow")?
            .as_secs();
        let path = format!("logs/{}.log", time);
        let sink = std::fs::File::create(&path).with_context(|| format!("create {}", path))?;
        loggers.push(simplelog::WriteLogger::new(log::LevelFilter::Debug, config, sink));
    }
    simplelog::CombinedLogger::init(loggers).context("initialize logger")
}

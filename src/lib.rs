//! Two small terminal companions sharing one library: a to-do list manager
//! and a rock-paper-scissors arena.
//!
//! Each program ships as its own binary (`todo`, `rps`). Neither persists
//! anything across runs; all state lives and dies with the process.

pub mod rps;
pub mod tasks;

/// Round win counters within a single session.
pub type Count = u32;

/// Random instance generation for computer opponents and tests.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// DISPLAY TOKENS
// ============================================================================
/// Marker prepended to a completed task's rendered line. Applied exactly once,
/// at render time; stored task text never carries it.
pub const DONE_MARKER: &str = "[Completed] ";
/// The only continue-prompt answer that keeps a session going.
pub const AFFIRMATIVE: &str = "yes";

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, WARN to stderr
/// so log lines never interleave with interactive prompts.
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("system clock before unix epoch")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Warn,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}

//! Shared helpers for integration tests.

#![allow(dead_code)]

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};
use turkish_checkers::{Board, GameConfig, RulesEngine};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Install a test log subscriber once per process.
///
/// Level comes from `TEST_LOG`, then `RUST_LOG`, then `"warn"`.
pub fn init_logging() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

/// Engine for a position drawn as 8 rows of `.`, `1` and `2`.
pub fn engine_from(rows: [&str; 8]) -> RulesEngine {
    engine_with(rows, GameConfig::default())
}

pub fn engine_with(rows: [&str; 8], config: GameConfig) -> RulesEngine {
    init_logging();
    let board = Board::from_rows(&rows).expect("valid diagram");
    RulesEngine::from_board(board, config)
}

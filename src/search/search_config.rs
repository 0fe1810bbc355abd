//! Search limits and their environment overrides.

use std::time::Duration;

use crate::chess_errors::ChessErrors;

pub const MOVE_TIME_ENV: &str = "CHESS_AI_MOVE_TIME_MS";
pub const MAX_DEPTH_ENV: &str = "CHESS_AI_MAX_DEPTH";
pub const TT_MB_ENV: &str = "CHESS_AI_TT_MB";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Wall-clock budget per `find_best_move` call.
    pub time_limit: Duration,
    /// Deepest iteration attempted.
    pub depth_limit: u32,
    pub transposition_table_mb: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            time_limit: Duration::from_millis(1000),
            depth_limit: 100,
            transposition_table_mb: 16,
        }
    }
}

impl SearchConfig {
    pub fn with_time_limit(mut self, time_limit: Duration) -> Self {
        self.time_limit = time_limit;
        self
    }

    pub fn with_depth_limit(mut self, depth_limit: u32) -> Self {
        self.depth_limit = depth_limit;
        self
    }

    /// Defaults overridden by any of the `CHESS_AI_*` variables that are set.
    pub fn from_env() -> Result<Self, ChessErrors> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ChessErrors> {
        let mut config = Self::default();

        if let Some(raw) = lookup(MOVE_TIME_ENV) {
            config.time_limit = Duration::from_millis(parse_value(MOVE_TIME_ENV, &raw)?);
        }
        if let Some(raw) = lookup(MAX_DEPTH_ENV) {
            config.depth_limit = parse_value(MAX_DEPTH_ENV, &raw)?;
        }
        if let Some(raw) = lookup(TT_MB_ENV) {
            config.transposition_table_mb = parse_value(TT_MB_ENV, &raw)?;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ChessErrors> {
        if self.depth_limit == 0 {
            return Err(ChessErrors::InvalidConfig {
                key: MAX_DEPTH_ENV.to_owned(),
                message: "depth limit must be at least 1".to_owned(),
            });
        }
        if self.transposition_table_mb == 0 {
            return Err(ChessErrors::InvalidConfig {
                key: TT_MB_ENV.to_owned(),
                message: "transposition table needs at least 1 MB".to_owned(),
            });
        }
        Ok(())
    }
}

/// Parse one numeric setting, naming the key in the error.
pub fn parse_value<T: std::str::FromStr>(key: &str, raw: &str) -> Result<T, ChessErrors> {
    raw.trim().parse::<T>().map_err(|_| ChessErrors::InvalidConfig {
        key: key.to_owned(),
        message: format!("'{raw}' is not a valid number"),
    })
}

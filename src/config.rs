// src/config.rs
//! Process configuration read from the environment (after `.env` via dotenvy).
//!
//! - `DEBUG_ROUTES=1`  mount `/metrics` and install the Prometheus recorder
//! - `PSI_DEV_LOG=1`   compact tracing output, dev environments only
//! - `PSI_LEXICON_PATH` see [`crate::lexicon`]

use anyhow::{Context, Result};
use std::sync::Arc;

use crate::lexicon::Lexicon;

pub const ENV_DEBUG_ROUTES: &str = "DEBUG_ROUTES";
pub const ENV_DEV_LOG: &str = "PSI_DEV_LOG";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub debug_routes: bool,
    pub dev_log: bool,
    pub lexicon: Arc<Lexicon>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let lexicon = Lexicon::load_default().context("loading cue lexicon")?;
        Ok(Self {
            debug_routes: env_flag(ENV_DEBUG_ROUTES),
            dev_log: env_flag(ENV_DEV_LOG) && is_dev_env(),
            lexicon,
        })
    }
}

/// "1" / "true" / "yes" (any case) → true; anything else or unset → false.
pub fn env_flag(name: &str) -> bool {
    parse_flag(std::env::var(name).ok().as_deref())
}

fn parse_flag(raw: Option<&str>) -> bool {
    matches!(
        raw.map(|s| s.trim().to_ascii_lowercase()).as_deref(),
        Some("1" | "true" | "yes")
    )
}

/// Debug build, or SHUTTLE_ENV in {local, development, dev}.
pub fn is_dev_env() -> bool {
    if cfg!(debug_assertions) {
        return true;
    }
    matches!(
        std::env::var("SHUTTLE_ENV")
            .unwrap_or_default()
            .to_ascii_lowercase()
            .as_str(),
        "local" | "development" | "dev"
    )
}

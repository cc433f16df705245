//! Process-level bootstrap configuration (spec §5.3 of `SPEC_FULL.md`).
//!
//! Unlike the library crates' `OnceLock`-backed `*_config()` accessors (which
//! read a single env var lazily, wherever first needed), the listen address
//! and worker pool size are read once, up front, via `clap` so `--help`
//! documents them. `DATA_ROOT` itself stays owned by
//! `lib_storage::config::storage_config`; this struct only reads the
//! override knobs specific to the HTTP process.

use clap::Parser;
use std::net::SocketAddr;

#[derive(Debug, Parser)]
#[command(name = "api-service", about = "Annotation recommender HTTP service")]
pub struct ApiConfig {
    /// Address the HTTP server binds to.
    #[arg(long, env = "BIND_ADDR", default_value = "0.0.0.0:8080")]
    pub bind_addr: SocketAddr,

    /// Number of training workers; defaults to available cores (spec §5).
    #[arg(long, env = "TRAIN_WORKERS")]
    pub train_workers: Option<usize>,

    /// Requests-per-second allowed per caller before throttling.
    #[arg(long, env = "RATE_LIMIT_PER_SECOND", default_value_t = 80)]
    pub rate_limit_per_second: u64,

    /// Burst size allowed above the steady-state rate limit.
    #[arg(long, env = "RATE_LIMIT_BURST", default_value_t = 50)]
    pub rate_limit_burst: u32,
}

// region: Unit Test
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bind_addr_parses() {
        let config = ApiConfig::parse_from(["api-service"]);
        assert_eq!(config.bind_addr.port(), 8080);
        assert!(config.train_workers.is_none());
    }

    #[test]
    fn test_explicit_flags_override_defaults() {
        let config = ApiConfig::parse_from([
            "api-service",
            "--bind-addr",
            "127.0.0.1:9090",
            "--train-workers",
            "2",
        ]);
        assert_eq!(config.bind_addr.port(), 9090);
        assert_eq!(config.train_workers, Some(2));
    }
}

// endregion: Unit Test

//! Bundled classifier implementations (spec §4.4), dependency-light
//! baselines standing in for the interchangeable ML backends the original
//! system treats as out-of-core.

pub mod passthrough;
pub mod sentence;
pub mod token;

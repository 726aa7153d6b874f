//! CommunityStrategies Library
//!
//! Data model for strategies published on a trading-bot community
//! platform, with derived-value resolution for names, URLs, logos and
//! risk levels.

pub mod common;
pub mod community;
pub mod config;

// Re-export commonly used types
pub use common::errors::{CommunityError, Result};
pub use common::types::ProfileRisk;
pub use community::{
    parse_strategies, CategoryData, FlexibleRecord, IdentifiersProvider, ProfitabilitySeries,
    ResultsData, StrategyData,
};
pub use config::types::AppConfig;

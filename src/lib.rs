//! Client library for the ResellerClub HTTP/JSON API.
//!
//! ```rust,no_run
//! use resellerclub::{ClientConfig, ResellerClient};
//! use resellerclub::loggers::LoggerBuilder;
//!
//! # async fn example() -> Result<(), resellerclub::RcError> {
//! let logger = LoggerBuilder::new("resellerclub").build()?;
//! let client = ResellerClient::new(ClientConfig::new("123456", "secret").with_test_mode(true), logger)?;
//!
//! for d in client.domains().check_availability(&["example"], &["com", "net"]).await? {
//!     println!("{}: {}", d.domain, d.status);
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod configs;
pub mod core;
pub mod loggers;
pub mod retrieve;

pub use crate::api::ResellerClient;
pub use crate::configs::{ClientConfig, ConfigManager};
pub use crate::core::error::RcError;
pub use crate::core::flex::{FlexBool, FlexFloat, FlexInt, FlexTime};

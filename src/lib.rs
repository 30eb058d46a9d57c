//! reqres_basics Library
//!
//! A fixed API target for reqres.in:
//! - `https://reqres.in` as the service root
//! - `/api/users` as the endpoint
//! - `200` as the expected status
//!
//! The `reqres_basics` binary prints the three values; `reqres_probe`
//! checks them against the live service.

pub mod models;
pub mod providers;
pub mod utils;

pub use models::{ApiTarget, AppError, AppResult, ErrorCode, ProbeConfig, ProbeReport};
pub use providers::ReqresClient;

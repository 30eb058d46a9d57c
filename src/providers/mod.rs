//! Providers Module - outbound HTTP clients

pub mod reqres;

pub use reqres::ReqresClient;

//! HTTP transport shared by the API clients

pub mod client;
pub mod response;

pub use client::{HttpClient, HttpClientBuilder};
pub use response::{read_json, read_unit, unwrap_value};

#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

mod client;
mod config;
mod error;
mod http;
mod models;
mod port;
mod url;

pub use client::{ApiClient, DefaultApiClient};
pub use config::ApiConfig;
pub use http::{HttpBackend, ReqwestBackend};

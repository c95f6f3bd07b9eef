//! HTTP access to the WortWunder word-list API.
pub mod client;
pub mod recorder;

pub use client::ApiClient;
pub use recorder::ApiSessionRecorder;

#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

pub mod config;
pub mod history;
pub mod poller;
pub mod registry;
pub mod sink;
pub mod submitter;
pub mod throttle;

pub use config::GenerationConfig;
pub use history::HistoryCache;
pub use poller::GenerationSlot;
pub use registry::VoiceRegistry;
pub use sink::{DeliveryContext, ResultSink};
pub use submitter::GenerationSubmitter;
pub use throttle::THROTTLE_ADVISORY_MESSAGE;

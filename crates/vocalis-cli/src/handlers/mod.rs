//! Command handlers.

mod generate;
mod history;
mod voices;

pub use generate::{handle_convert, handle_effect, handle_say};
pub use history::{handle_history_delete, handle_history_list};
pub use voices::handle_voices;

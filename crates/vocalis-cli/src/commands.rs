//! Subcommand definitions.

use std::path::PathBuf;

use clap::Subcommand;

use vocalis_core::ServiceKind;

/// Available commands for the vocalis studio tool.
#[derive(Subcommand)]
pub enum Commands {
    /// Generate speech from text
    Say {
        /// Text to speak (up to 5000 characters)
        text: String,
        /// Voice id to use
        #[arg(short = 'V', long)]
        voice: String,
    },

    /// Generate a sound effect from a prompt
    Effect {
        /// Effect description (up to 500 characters)
        prompt: String,
    },

    /// Convert a recording to another voice
    Convert {
        /// Path to the reference audio file (mp3 or wav, up to 50 MiB)
        file: PathBuf,
        /// Target voice id
        #[arg(short = 'V', long)]
        voice: String,
    },

    /// List the voices available for a service
    Voices {
        /// Service to list voices for
        #[arg(long, default_value = "styletts2")]
        service: ServiceKind,
    },

    /// Inspect or edit the generation history
    History {
        #[command(subcommand)]
        command: HistoryCommand,
    },
}

/// History subcommands.
#[derive(Subcommand)]
pub enum HistoryCommand {
    /// List history items for a service, grouped by date
    List {
        /// Service to list history for
        #[arg(long, default_value = "styletts2")]
        service: ServiceKind,
    },

    /// Delete a history item (record and stored audio)
    Delete {
        /// Id of the clip to delete
        id: String,
    },
}

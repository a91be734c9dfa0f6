use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Vigil: field-investigation client with a hands-free voice assistant.
#[derive(Parser, Debug)]
#[command(name = "vigil", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level override (e.g. "debug", "vigil=trace").
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the voice assistant headless, replaying recorded clips.
    Assistant {
        /// Directory of WAV clips, played back in name order as microphone input.
        #[arg(long)]
        clips: PathBuf,

        /// Directory to write spoken replies to.
        #[arg(long)]
        replies: Option<PathBuf>,

        /// Stop after this many completed turns.
        #[arg(long)]
        turns: Option<usize>,
    },

    /// List the captures of an investigation.
    Captures {
        investigation: u32,

        /// Title shown in the panel heading.
        #[arg(long)]
        title: Option<String>,
    },

    /// Analyze one capture, optionally drilling into a detected face.
    Analyze {
        capture: u32,

        /// Index of the face to show details for.
        #[arg(long)]
        face: Option<usize>,
    },

    /// Show what an investigation-card button would ask before acting.
    Card {
        investigation: u32,

        /// Card title.
        #[arg(long)]
        title: String,

        /// Current status: Live, Pending or Completed.
        #[arg(long, default_value = "Pending")]
        status: String,

        /// Button: open, start, continue, edit, delete, pause, complete.
        #[arg(long, default_value = "open")]
        action: String,

        /// Card timestamp anchor on the investigations page.
        #[arg(long, default_value = "")]
        timestamp: String,
    },

    /// Upload a JPEG snapshot to an investigation.
    Snapshot { investigation: u32, image: PathBuf },

    /// Control the drone loudspeaker.
    Speaker {
        #[command(subcommand)]
        action: SpeakerCommand,
    },

    /// Print the effective configuration as JSON.
    Config,
}

#[derive(Subcommand, Debug)]
pub enum SpeakerCommand {
    /// Upload an audio file and start playing it.
    Upload {
        file: PathBuf,

        /// Volume in percent; defaults to the configured volume.
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
        volume: Option<u8>,
    },
    /// Stop playback.
    Stop,
}

pub fn parse() -> Args {
    Args::parse()
}

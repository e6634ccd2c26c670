//! Business logic services.

pub mod analyzer;
pub mod transcript;

pub use analyzer::ViralityAnalyzer;
pub use transcript::{SimulatedTranscriptProvider, TranscriptError, TranscriptProvider};

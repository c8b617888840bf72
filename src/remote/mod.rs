//! Puzzle site access: login check, input download, answer submission

mod client;
mod html;

pub use client::RemoteClient;
pub use html::SubmitOutcome;

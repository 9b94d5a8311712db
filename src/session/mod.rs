//! The interactive practice session.
//!
//! A linear conversation: pick a language, pick a difficulty, stream generated
//! problems, and branch on "more" / "new difficulty" answers.

/// Interpretation of the free-form answers read between rounds.
pub mod choice;
mod session;
mod ui;

pub use session::{Session, SessionConfig};

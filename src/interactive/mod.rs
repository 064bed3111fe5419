//! Player-facing collaborators
//!
//! Input comes through a [`Prompter`], output goes through a [`RoundObserver`].

mod observer;
mod prompt;

pub use observer::{RoundObserver, SilentObserver};
pub use prompt::{LinePrompter, Prompter};

//! Launch signup form.
//!
//! Validates the visitor's email locally and posts `{ email, message }` to a
//! third-party form collection endpoint. One attempt per user action; the
//! outcome is kept in [`SignupForm`] until the user resets it.

mod client;
mod error;
mod state;
mod validate;

pub use client::{FormClient, HttpFormClient, Submission};
pub use error::SubmitError;
pub use state::{FormStatus, SignupForm};
pub use validate::is_valid_email;

#[cfg(test)]
pub use client::MockFormClient;

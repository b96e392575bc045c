//! Session state and the operations the UI calls.
//!
//! `SessionState` composes the collection, filters, turn tracker and the
//! current card into one owned object. Every operation runs to completion
//! and either fully applies or leaves the state untouched.

mod state;
mod status;

pub use state::{DrawOutcome, DrawRefusal, DrawTicket, SessionState};
pub use status::StatusMessage;

//! Command handlers for the remote operations both views issue.
//!
//! View-state transitions return a [`Command`]; [`execute`] runs it against
//! the collaborators and yields an [`Outcome`] that is applied back to the
//! state. The terminal front-end submits commands to a [`RequestWorker`];
//! headless callers drive a [`Session`].

mod command;
mod execute;
mod session;
mod worker;

pub use command::{Command, Outcome};
pub use execute::execute;
pub use session::Session;
pub use worker::{Completion, RequestWorker, WorkerStopped};

//! Session domain module.
//!
//! The session is the single owner of everything a user has entered for one
//! AHP decision. It is an immutable snapshot replaced wholesale on each
//! command, so a matrix is never observed half-edited.

mod aggregate;
mod command;
mod errors;

pub use aggregate::AhpSession;
pub use command::AhpCommand;
pub use errors::SessionError;

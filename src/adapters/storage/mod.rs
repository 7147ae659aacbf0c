//! Storage Adapters
//!
//! Persists [`AhpSession`](crate::domain::session::AhpSession) snapshots.
//!
//! ## Usage
//!
//! ```no_run
//! use ahp_sherpa::adapters::storage::session_file;
//!
//! let session = session_file::load("decision.yaml").expect("readable snapshot");
//! session_file::save("decision.json", &session).expect("writable path");
//! ```

pub mod session_file;

pub use session_file::SessionFileError;

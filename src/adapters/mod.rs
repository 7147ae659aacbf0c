//! Adapters - Connect the domain to the outside world.
//!
//! - `storage` - Session snapshots on disk (JSON or YAML)

pub mod storage;

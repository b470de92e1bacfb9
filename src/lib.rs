//! # Amazons
//!
//! Text front end for the Amazons engine: a line-oriented command session,
//! game logs, and configuration. The rules, move generation and search live
//! in the `amazons_engine` crate.

pub mod error;
pub mod notation;
pub mod protocol;
pub mod record;
pub mod settings;

pub use error::{ConfigError, ProtocolError, ProtocolResult, RecordError};
pub use protocol::{Control, Session};
pub use record::{GameHeader, MoveHistory};
pub use settings::{DepthStage, EngineConfig};

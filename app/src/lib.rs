//! FILENAME: app/src/lib.rs
// PURPOSE: Library side of the ledger normalizer: session, config, logging.

pub mod config;
pub mod error;
pub mod logging;
pub mod preview;
pub mod session;

pub use config::AppConfig;
pub use error::{AppError, StateError};
pub use logging::init_logging;
pub use preview::{Preview, PreviewFormatter};
pub use session::{LedgerSession, LoadSummary, LoadedLedger};

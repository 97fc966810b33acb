// src/common/mod.rs

// --- Declare all public modules within common ---
pub mod error;
pub mod hal_traits;
pub mod protocol;
pub mod token;
pub mod writer;

#[cfg(test)]
pub(crate) mod mock;

// --- Re-export key types/traits for easier access ---

// From error.rs
pub use error::MonSensError;

// From hal_traits.rs
pub use hal_traits::MonSensSerial;

// From protocol.rs (constants - users can also reach them via common::protocol::*)
pub use protocol::{DEFAULT_CAPACITY, DEFAULT_MAX_TOKEN_LEN};

// From token.rs
pub use token::{Token, TokenError};

// From writer.rs
pub use writer::ResponseWriter;

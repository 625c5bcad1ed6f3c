pub mod client;
pub mod parser;
pub mod prompt;

pub use client::*;
pub use parser::*;
pub use prompt::*;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompletionError {
    #[error("Completion endpoint unreachable at {0}")]
    Connection(String),

    #[error("Request timed out after {0}s")]
    Timeout(u64),

    #[error("Completion endpoint returned error (status {status}): {body}")]
    Endpoint { status: u16, body: String },

    #[error("Response parsing error: {0}")]
    ResponseParsing(String),
}

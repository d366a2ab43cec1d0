//! # Quill Shared
//!
//! Request/response types of the HTTP API, and the wire form of errors.

pub mod dto;
pub mod response;

pub use response::ErrorResponse;

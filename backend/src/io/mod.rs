//! # IO Module
//!
//! Interface layer between HTTP callers and the clinic domain.
//!
//! Requests arrive as `shared` DTOs, are mapped into domain commands, and the
//! results are mapped back into DTOs. Domain errors are translated into HTTP
//! status codes with a structured `ErrorResponse` body.

pub mod rest;

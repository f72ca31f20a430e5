//! # Storage Module
//!
//! Handles all data retention for the clinic backend.
//!
//! The domain layer only sees the traits in [`traits`]; the in-memory backend in
//! [`memory`] is the one implementation. State is process-scoped.
//!
//! ## Key Responsibilities
//!
//! - **Repositories**: one per entity kind, behind a `Connection` factory
//! - **Identifier Allocation**: per-kind monotonic ids via [`IdAllocator`]
//! - **Atomic Transitions**: slot booking, appointment completion and invoice
//!   closing happen under a per-row lock

pub mod id_allocator;
pub mod memory;
pub mod traits;

pub use id_allocator::IdAllocator;
pub use memory::MemoryConnection;
pub use traits::*;

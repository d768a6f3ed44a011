//! Repository layer abstractions and storage implementations.
//!
//! # Responsibility
//! - Define the task storage contract.
//! - Isolate storage details from service/business orchestration.
//!
//! # Invariants
//! - Repositories never fail: absence is a normal outcome (`false`/`None`).

pub mod task_repo;

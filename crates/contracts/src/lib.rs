//! Shared domain contracts for the pizzeria management system.
//!
//! Plain data types and their derived computations only: the crate does no
//! I/O and never logs. Services and adapters live in the `backend` crate.

pub mod dashboards;
pub mod domain;
pub mod enums;

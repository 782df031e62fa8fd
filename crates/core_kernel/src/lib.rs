//! Core Kernel - Foundational types for the movie rental system
//!
//! This crate provides the fundamental building blocks used across the
//! domain modules:
//! - Money types with precise decimal arithmetic
//! - Strongly-typed identifiers
//! - Port abstractions for repository boundaries

pub mod identifiers;
pub mod money;
pub mod ports;

pub use identifiers::{CustomerId, MovieId};
pub use money::{Money, MoneyError, Rate, MAX_DOLLAR_AMOUNT};
pub use ports::{DomainPort, PortError};

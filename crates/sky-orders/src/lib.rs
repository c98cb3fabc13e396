//! `sky-orders` — synthetic demand for the delivery network.
//!
//! # Crate layout
//!
//! | Module        | Contents                                              |
//! |---------------|-------------------------------------------------------|
//! | [`catalog`]   | Name / product / address word lists and formatters    |
//! | [`generator`] | `OrderGenerator`, `Consumer`                          |
//! | [`error`]     | `OrderError`, `OrderResult<T>`                        |
//!
//! Orders are where routes get resolved: the generator calls the pathfinder
//! exactly once per shipment, at creation time, and stores the resulting hub
//! sequence on the shipment.  The movement engine never re-plans.
//!
//! All randomness comes from a seeded [`SimRng`][sky_core::SimRng], so a
//! fixed seed reproduces the same customers, labels, and hub picks.

pub mod catalog;
pub mod error;
pub mod generator;


pub use error::{OrderError, OrderResult};
pub use generator::{Consumer, OrderGenerator};

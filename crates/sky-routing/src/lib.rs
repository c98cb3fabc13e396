//! `sky-routing` — hub connection graph and shortest-path search.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                 |
//! |----------------|----------------------------------------------------------|
//! | [`graph`]      | `RouteGraph` (adjacency over hub codes), `ConnectionSource` |
//! | [`pathfinder`] | `Pathfinder` trait, `Route`, `DijkstraPathfinder`        |
//! | [`loader`]     | CSV loading for hubs and connections                     |
//! | [`error`]      | `RoutingError`, `RoutingResult<T>`                       |
//!
//! # Lifecycle
//!
//! A `RouteGraph` is built once from a [`ConnectionSource`] and is read-only
//! afterwards.  If the underlying connection set changes, build a fresh graph
//! and swap the whole value — queries never observe a half-rebuilt structure.

pub mod error;
pub mod graph;
pub mod loader;
pub mod pathfinder;


pub use error::{RoutingError, RoutingResult};
pub use graph::{ConnectionSource, RouteGraph};
pub use loader::{load_connections_csv, load_connections_reader, load_hubs_csv, load_hubs_reader};
pub use pathfinder::{DijkstraPathfinder, Pathfinder, Route};

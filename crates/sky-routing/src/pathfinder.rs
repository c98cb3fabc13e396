//! Routing trait and default Dijkstra implementation.
//!
//! # Pluggability
//!
//! Order creation calls routing via the [`Pathfinder`] trait, so applications
//! can swap in custom implementations (A*, landmark heuristics) without
//! touching the engine.  The default [`DijkstraPathfinder`] is sufficient for
//! networks of this size.
//!
//! # Determinism
//!
//! The frontier heap is keyed by `(distance, HubCode)`: the secondary key
//! breaks cost ties by code order, so equal-cost alternatives resolve the
//! same way on every run for identical input.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use rustc_hash::FxHashMap;

use sky_core::HubCode;

use crate::graph::RouteGraph;
use crate::RoutingError;

// ── Route ─────────────────────────────────────────────────────────────────────

/// The result of a routing query: an ordered hub sequence and its total cost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// Hubs to traverse in order, origin first, destination last.
    pub hubs: Vec<HubCode>,
    /// Sum of lane weights along the route.
    pub total_cost: u32,
}

impl Route {
    /// Number of legs (consecutive hub pairs) in the route.
    #[inline]
    pub fn legs(&self) -> usize {
        self.hubs.len().saturating_sub(1)
    }

    /// `true` if origin and destination are the same hub (zero legs).
    pub fn is_trivial(&self) -> bool {
        self.hubs.len() <= 1
    }
}

// ── Pathfinder trait ──────────────────────────────────────────────────────────

/// Pluggable shortest-path engine.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so a single instance can be shared
/// wherever the application keeps its routing handle.
pub trait Pathfinder: Send + Sync {
    /// Compute the least-cost route from `start` to `end`.
    ///
    /// # Errors
    ///
    /// - [`RoutingError::UnknownHub`] if either endpoint is not in the graph.
    /// - [`RoutingError::NoRoute`] if `end` is unreachable from `start`.
    ///
    /// Never returns a partial or placeholder-filled route.
    fn find_path(
        &self,
        graph: &RouteGraph,
        start: &HubCode,
        end: &HubCode,
    ) -> Result<Route, RoutingError>;
}

// ── DijkstraPathfinder ────────────────────────────────────────────────────────

/// Standard Dijkstra's algorithm over the hub adjacency map.
///
/// Duplicate frontier entries are allowed; stale ones are skipped when popped
/// against the distance map.  The search terminates early once the target is
/// settled — valid because all weights are non-negative.
pub struct DijkstraPathfinder;

impl Pathfinder for DijkstraPathfinder {
    fn find_path(
        &self,
        graph: &RouteGraph,
        start: &HubCode,
        end: &HubCode,
    ) -> Result<Route, RoutingError> {
        dijkstra(graph, start, end)
    }
}

// ── Dijkstra internals ────────────────────────────────────────────────────────

fn dijkstra(graph: &RouteGraph, start: &HubCode, end: &HubCode) -> Result<Route, RoutingError> {
    if !graph.contains(start) {
        return Err(RoutingError::UnknownHub(start.clone()));
    }
    if !graph.contains(end) {
        return Err(RoutingError::UnknownHub(end.clone()));
    }
    if start == end {
        return Ok(Route { hubs: vec![start.clone()], total_cost: 0 });
    }

    // dist[h] = best known cost to reach h; absent means "infinity".
    let mut dist: FxHashMap<HubCode, u32> = FxHashMap::default();
    // prev[h] = predecessor of h on the best known path.
    let mut prev: FxHashMap<HubCode, HubCode> = FxHashMap::default();

    dist.insert(start.clone(), 0);

    // Min-heap: (cost, hub). Reverse makes BinaryHeap (max) behave as min-heap.
    let mut heap: BinaryHeap<Reverse<(u32, HubCode)>> = BinaryHeap::new();
    heap.push(Reverse((0, start.clone())));

    while let Some(Reverse((cost, hub))) = heap.pop() {
        if &hub == end {
            return Ok(reconstruct(prev, start, end, cost));
        }

        // Skip stale heap entries.
        if dist.get(&hub).is_some_and(|&best| cost > best) {
            continue;
        }

        for (neighbor, weight) in graph.neighbors(&hub) {
            let new_cost = cost.saturating_add(weight);
            let improved = dist
                .get(neighbor)
                .is_none_or(|&best| new_cost < best);

            if improved {
                dist.insert(neighbor.clone(), new_cost);
                prev.insert(neighbor.clone(), hub.clone());
                heap.push(Reverse((new_cost, neighbor.clone())));
            }
        }
    }

    Err(RoutingError::NoRoute { from: start.clone(), to: end.clone() })
}

fn reconstruct(
    prev: FxHashMap<HubCode, HubCode>,
    start: &HubCode,
    end: &HubCode,
    total_cost: u32,
) -> Route {
    let mut hubs = vec![end.clone()];
    let mut cur = end;
    while cur != start {
        // The predecessor chain is complete by construction: `end` was only
        // reachable through relaxations that recorded a parent.
        match prev.get(cur) {
            Some(parent) => {
                hubs.push(parent.clone());
                cur = parent;
            }
            None => break,
        }
    }
    hubs.reverse();
    Route { hubs, total_cost }
}

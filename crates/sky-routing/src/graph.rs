//! The hub connection graph.
//!
//! # Data layout
//!
//! Adjacency is a two-level `FxHashMap`: hub code → (neighbor code → weight).
//! The network is small (tens to low hundreds of hubs) and queried by string
//! key, so a hash adjacency beats an index-based layout on simplicity without
//! giving up anything measurable.
//!
//! Every connection is undirected: a lane A↔B is traversable in both
//! directions at the same weight.  Parallel lanes between the same pair
//! collapse to the minimum weight — the only one that can ever appear on a
//! shortest path.

use rustc_hash::FxHashMap;

use sky_core::{HubCode, HubConnection};

// ── ConnectionSource ──────────────────────────────────────────────────────────

/// Supplier of the full connection set, consumed once per graph build.
///
/// Storage backends, CSV fixtures, and test cases all feed the graph through
/// this trait.
pub trait ConnectionSource {
    fn connections(&self) -> Vec<HubConnection>;
}

impl ConnectionSource for Vec<HubConnection> {
    fn connections(&self) -> Vec<HubConnection> {
        self.clone()
    }
}

impl ConnectionSource for &[HubConnection] {
    fn connections(&self) -> Vec<HubConnection> {
        self.to_vec()
    }
}

// ── RouteGraph ────────────────────────────────────────────────────────────────

/// Undirected, non-negatively weighted graph over hub codes.
///
/// Immutable after [`RouteGraph::from_connections`]; rebuild and swap the
/// whole value when the connection set changes.
#[derive(Default)]
pub struct RouteGraph {
    adjacency: FxHashMap<HubCode, FxHashMap<HubCode, u32>>,
}

impl RouteGraph {
    /// Build the adjacency structure from a collection of connections.
    ///
    /// Best-effort: records with a blank hub code on either side are skipped
    /// with a warning rather than failing the whole build.  An empty input
    /// yields an empty graph that answers "no route" for every query.
    pub fn from_connections(connections: impl IntoIterator<Item = HubConnection>) -> Self {
        let mut adjacency: FxHashMap<HubCode, FxHashMap<HubCode, u32>> = FxHashMap::default();
        let mut skipped = 0usize;

        for conn in connections {
            if conn.from.is_blank() || conn.to.is_blank() {
                tracing::warn!(
                    from = %conn.from,
                    to = %conn.to,
                    "skipping connection with blank hub code"
                );
                skipped += 1;
                continue;
            }

            // Both directions, keeping the minimum of parallel lanes.
            insert_min(&mut adjacency, conn.from.clone(), conn.to.clone(), conn.weight);
            insert_min(&mut adjacency, conn.to, conn.from, conn.weight);
        }

        if skipped > 0 {
            tracing::warn!(skipped, "route graph built from partially valid data");
        }
        tracing::debug!(hubs = adjacency.len(), "route graph built");

        Self { adjacency }
    }

    /// Build from a [`ConnectionSource`], consuming its full connection set.
    pub fn from_source(source: &impl ConnectionSource) -> Self {
        Self::from_connections(source.connections())
    }

    /// `true` if `code` appears as an endpoint of at least one connection.
    #[inline]
    pub fn contains(&self, code: &HubCode) -> bool {
        self.adjacency.contains_key(code)
    }

    /// Iterate over `(neighbor, weight)` pairs of `code`.
    ///
    /// Empty for unknown hubs.  Iteration order is unspecified; the
    /// pathfinder's tie-breaking does not depend on it.
    pub fn neighbors(&self, code: &HubCode) -> impl Iterator<Item = (&HubCode, u32)> {
        self.adjacency
            .get(code)
            .into_iter()
            .flat_map(|m| m.iter().map(|(n, &w)| (n, w)))
    }

    /// Iterate over every hub code with at least one connection.
    pub fn hubs(&self) -> impl Iterator<Item = &HubCode> {
        self.adjacency.keys()
    }

    /// Number of hubs with at least one connection.
    pub fn hub_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of stored directed lanes (two per undirected connection).
    pub fn lane_count(&self) -> usize {
        self.adjacency.values().map(|m| m.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}

fn insert_min(
    adjacency: &mut FxHashMap<HubCode, FxHashMap<HubCode, u32>>,
    from: HubCode,
    to: HubCode,
    weight: u32,
) {
    let entry = adjacency.entry(from).or_default().entry(to).or_insert(weight);
    if weight < *entry {
        *entry = weight;
    }
}

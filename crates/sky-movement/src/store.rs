//! Store contracts and in-memory implementations.
//!
//! The engine reads and writes shipments only through [`ShipmentStore`] and
//! resolves hub coordinates only through [`HubLookup`], so HTTP layers,
//! databases, and test doubles all plug in behind the same two traits.  The
//! in-memory implementations here are what the simulator itself runs on.

use rustc_hash::FxHashMap;

use sky_core::{CoreError, Hub, HubCode, Shipment, ShipmentId, ShipmentStatus};

use crate::StoreError;

// ── HubLookup ─────────────────────────────────────────────────────────────────

/// Read-only hub resolution by code.
pub trait HubLookup {
    fn hub(&self, code: &HubCode) -> Option<&Hub>;
}

/// In-memory hub collection keyed by code.
///
/// Built once at startup from administered hub data; the simulation only
/// reads it.
#[derive(Default)]
pub struct HubDirectory {
    hubs: FxHashMap<HubCode, Hub>,
}

impl HubDirectory {
    pub fn new(hubs: impl IntoIterator<Item = Hub>) -> Self {
        Self {
            hubs: hubs.into_iter().map(|h| (h.code.clone(), h)).collect(),
        }
    }

    /// Like [`HubLookup::hub`] but with a typed error for callers that treat
    /// a missing hub as a data-integrity problem rather than a soft skip.
    pub fn require(&self, code: &HubCode) -> Result<&Hub, CoreError> {
        self.hubs
            .get(code)
            .ok_or_else(|| CoreError::HubNotFound(code.clone()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Hub> {
        self.hubs.values()
    }

    pub fn len(&self) -> usize {
        self.hubs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hubs.is_empty()
    }
}

impl HubLookup for HubDirectory {
    fn hub(&self, code: &HubCode) -> Option<&Hub> {
        self.hubs.get(code)
    }
}

// ── ShipmentStore ─────────────────────────────────────────────────────────────

/// Persistence contract for shipments.
///
/// `list_by_status` hands out owned snapshots; the engine mutates its copy
/// and writes it back through `save`.  The tick loop is the single writer, so
/// a snapshot taken at the start of a pass stays accurate for that pass.
pub trait ShipmentStore {
    /// All shipments currently in `status`, as owned snapshots.
    fn list_by_status(&self, status: ShipmentStatus) -> Vec<Shipment>;

    /// Insert or update a shipment.
    ///
    /// # Errors
    ///
    /// Implementations may reject a write ([`StoreError`]); the engine logs
    /// it and carries on with the next shipment.
    fn save(&mut self, shipment: Shipment) -> Result<(), StoreError>;

    /// Look up one shipment by id.
    fn get(&self, id: ShipmentId) -> Option<&Shipment>;

    /// Total number of shipments ever stored.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// `FxHashMap`-backed store used by the simulator and tests.
///
/// Offers no durability — it exists to exercise the contract, not to
/// persist anything.
#[derive(Default)]
pub struct InMemoryShipmentStore {
    shipments: FxHashMap<ShipmentId, Shipment>,
}

impl InMemoryShipmentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ShipmentStore for InMemoryShipmentStore {
    fn list_by_status(&self, status: ShipmentStatus) -> Vec<Shipment> {
        let mut matches: Vec<Shipment> = self
            .shipments
            .values()
            .filter(|s| s.status == status)
            .cloned()
            .collect();
        // Ascending id order keeps tick processing reproducible.
        matches.sort_by_key(|s| s.id);
        matches
    }

    fn save(&mut self, shipment: Shipment) -> Result<(), StoreError> {
        self.shipments.insert(shipment.id, shipment);
        Ok(())
    }

    fn get(&self, id: ShipmentId) -> Option<&Shipment> {
        self.shipments.get(&id)
    }

    fn len(&self) -> usize {
        self.shipments.len()
    }
}

//! Order and consumer generation.

use sky_core::{ConsumerId, Shipment, ShipmentId, ShipmentStatus, SimRng, Tick};
use sky_movement::HubDirectory;
use sky_routing::{Pathfinder, RouteGraph};

use crate::catalog;
use crate::{OrderError, OrderResult};

// ── Consumer ──────────────────────────────────────────────────────────────────

/// A synthetic customer the generator assigns shipments to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Consumer {
    pub id: ConsumerId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

impl Consumer {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

// ── OrderGenerator ────────────────────────────────────────────────────────────

/// Creates consumers and queued shipments on demand.
///
/// This is the one place routes are resolved: every generated shipment gets
/// its hub sequence from the pathfinder before it ever reaches the movement
/// engine.  Seeded RNG makes the whole stream reproducible.
pub struct OrderGenerator<P: Pathfinder> {
    pathfinder: P,
    rng: SimRng,
    consumers: Vec<Consumer>,
    max_consumers: usize,
    next_shipment: u32,
    next_consumer: u32,
}

impl<P: Pathfinder> OrderGenerator<P> {
    pub fn new(pathfinder: P, seed: u64, max_consumers: usize) -> Self {
        Self {
            pathfinder,
            rng: SimRng::new(seed),
            consumers: Vec::new(),
            max_consumers,
            next_shipment: 0,
            next_consumer: 0,
        }
    }

    /// The customer base built so far.
    pub fn consumers(&self) -> &[Consumer] {
        &self.consumers
    }

    /// Register one new synthetic consumer, unless the base is at capacity.
    pub fn spawn_consumer(&mut self) -> Option<&Consumer> {
        if self.consumers.len() >= self.max_consumers {
            return None;
        }

        let (first_name, last_name) = catalog::full_name(&mut self.rng);
        let email = catalog::email(&first_name, &last_name, &mut self.rng);
        let consumer = Consumer {
            id: ConsumerId(self.next_consumer),
            email,
            phone: catalog::phone(&mut self.rng),
            address: catalog::street_address(&mut self.rng),
            first_name,
            last_name,
        };
        self.next_consumer += 1;

        tracing::info!(
            consumer = %consumer.id,
            name = %consumer.full_name(),
            "new customer registered"
        );
        self.consumers.push(consumer);
        self.consumers.last()
    }

    /// Create one queued shipment between two random distinct hubs.
    ///
    /// The route is resolved here, once, and stored on the shipment.  The
    /// shipment starts at the origin hub's coordinate with progress 0.
    ///
    /// # Errors
    ///
    /// - [`OrderError::NotReady`] until at least two hubs and one consumer
    ///   exist.
    /// - [`OrderError::Routing`] when the picked pair has no route — the
    ///   caller skips the order and retries on the next cadence.
    pub fn generate_order(
        &mut self,
        hubs: &HubDirectory,
        graph: &RouteGraph,
        now: Tick,
    ) -> OrderResult<Shipment> {
        if hubs.len() < 2 {
            return Err(OrderError::NotReady("at least two hubs must exist"));
        }
        if self.consumers.is_empty() {
            return Err(OrderError::NotReady("at least one consumer must exist"));
        }

        // Sort by code so hub picks depend only on the seed, not on hash-map
        // iteration order.
        let mut all: Vec<_> = hubs.iter().collect();
        all.sort_by(|a, b| a.code.cmp(&b.code));
        let picked = self.rng.choose_multiple(&all, 2);
        let (origin, destination) = (picked[0], picked[1]);

        let route = self
            .pathfinder
            .find_path(graph, &origin.code, &destination.code)?;

        let Some(buyer) = self.rng.choose(&self.consumers) else {
            return Err(OrderError::NotReady("at least one consumer must exist"));
        };

        let shipment = Shipment {
            id: ShipmentId(self.next_shipment),
            label: catalog::product_label(&mut self.rng),
            consumer_name: buyer.full_name(),
            delivery_address: buyer.address.clone(),
            container_id: catalog::container_id(&mut self.rng),
            origin: origin.code.clone(),
            destination: destination.code.clone(),
            route: route.hubs,
            status: ShipmentStatus::Queued,
            progress_percent: 0,
            position: origin.position,
            created_tick: now,
        };
        self.next_shipment += 1;

        tracing::info!(
            shipment = %shipment.id,
            label = %shipment.label,
            origin = %shipment.origin,
            destination = %shipment.destination,
            legs = shipment.legs(),
            distance_km = (origin.position.distance_m(destination.position) / 1_000.0) as u32,
            customer = %shipment.consumer_name,
            "new order"
        );

        Ok(shipment)
    }
}

//! Unit tests for sky-movement.

use sky_core::{GeoPoint, Hub, HubCode, Shipment, ShipmentId, ShipmentStatus, Tick};

use crate::{
    HubDirectory, InMemoryShipmentStore, MovementEngine, MovementError, ShipmentStore, StoreError,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn code(s: &str) -> HubCode {
    HubCode::from(s)
}

fn hub(c: &str, lat: f32, lon: f32) -> Hub {
    Hub {
        code: code(c),
        city: c.to_string(),
        country: "Testland".to_string(),
        position: GeoPoint::new(lat, lon),
        tz_offset_hours: 0,
    }
}

/// Right-angle three-hub network from the interpolation contract:
/// A=(0,0), B=(10,0), C=(10,10).
fn abc_directory() -> HubDirectory {
    HubDirectory::new([hub("A", 0.0, 0.0), hub("B", 10.0, 0.0), hub("C", 10.0, 10.0)])
}

fn shipment(id: u32, route: &[&str], status: ShipmentStatus, progress: u8) -> Shipment {
    Shipment {
        id: ShipmentId(id),
        label: format!("cargo-{id}"),
        consumer_name: "Test Consumer".to_string(),
        delivery_address: "1 Test Street".to_string(),
        container_id: format!("CONT-{id:08}"),
        origin: code(route[0]),
        destination: code(route[route.len() - 1]),
        route: route.iter().map(|&h| code(h)).collect(),
        status,
        progress_percent: progress,
        position: GeoPoint::new(0.0, 0.0),
        created_tick: Tick::ZERO,
    }
}

fn engine_with(shipments: Vec<Shipment>, step: u8) -> MovementEngine<InMemoryShipmentStore> {
    let mut store = InMemoryShipmentStore::new();
    for s in shipments {
        store.save(s).unwrap();
    }
    MovementEngine::new(store, step)
}

/// Store double that rejects every write for one shipment id.
struct RejectingStore {
    inner: InMemoryShipmentStore,
    reject: ShipmentId,
}

impl ShipmentStore for RejectingStore {
    fn list_by_status(&self, status: ShipmentStatus) -> Vec<Shipment> {
        self.inner.list_by_status(status)
    }

    fn save(&mut self, s: Shipment) -> Result<(), StoreError> {
        if s.id == self.reject {
            return Err(StoreError("disk on fire".to_string()));
        }
        self.inner.save(s)
    }

    fn get(&self, id: ShipmentId) -> Option<&Shipment> {
        self.inner.get(id)
    }

    fn len(&self) -> usize {
        self.inner.len()
    }
}

// ── Interpolation ─────────────────────────────────────────────────────────────

mod interp {
    use super::*;
    use crate::route_position;

    #[test]
    fn three_hub_reference_points() {
        let hubs = abc_directory();
        let route = [code("A"), code("B"), code("C")];

        // 25 % of 2 legs = 0.5 leg-units → halfway along A→B.
        let p25 = route_position(&route, 25, &hubs).unwrap();
        assert_eq!(p25, GeoPoint::new(5.0, 0.0));

        // 75 % of 2 legs = 1.5 leg-units → halfway along B→C.
        let p75 = route_position(&route, 75, &hubs).unwrap();
        assert_eq!(p75, GeoPoint::new(10.0, 5.0));
    }

    #[test]
    fn progress_zero_is_the_origin() {
        let hubs = abc_directory();
        let route = [code("A"), code("B"), code("C")];
        assert_eq!(route_position(&route, 0, &hubs).unwrap(), GeoPoint::new(0.0, 0.0));
    }

    #[test]
    fn progress_hundred_resolves_to_last_leg_not_past_it() {
        let hubs = abc_directory();
        let route = [code("A"), code("B"), code("C")];
        // leg_span == legs exactly; the clamp must land on leg B→C at t=1.
        assert_eq!(route_position(&route, 100, &hubs).unwrap(), GeoPoint::new(10.0, 10.0));
    }

    #[test]
    fn two_hub_route_matches_direct_interpolation() {
        let hubs = abc_directory();
        let route = [code("A"), code("B")];
        for pct in [0u8, 10, 30, 50, 80, 99] {
            let got = route_position(&route, pct, &hubs).unwrap();
            let direct = GeoPoint::new(0.0, 0.0)
                .lerp(GeoPoint::new(10.0, 0.0), f32::from(pct) / 100.0);
            assert_eq!(got, direct, "at {pct}%");
        }
    }

    #[test]
    fn degenerate_route_is_rejected() {
        let hubs = abc_directory();
        assert!(matches!(
            route_position(&[code("A")], 50, &hubs),
            Err(MovementError::DegenerateRoute)
        ));
        assert!(matches!(
            route_position(&[], 50, &hubs),
            Err(MovementError::DegenerateRoute)
        ));
    }

    #[test]
    fn unresolved_leg_endpoint_is_reported() {
        let hubs = abc_directory();
        let route = [code("A"), code("GHOST")];
        let err = route_position(&route, 50, &hubs).unwrap_err();
        match err {
            MovementError::UnresolvedHub(c) => assert_eq!(c, code("GHOST")),
            other => panic!("unexpected error: {other}"),
        }
    }
}

// ── Engine passes ─────────────────────────────────────────────────────────────

mod engine {
    use super::*;

    #[test]
    fn departure_flips_status_without_advancing() {
        let hubs = abc_directory();
        let mut eng = engine_with(vec![shipment(1, &["A", "B", "C"], ShipmentStatus::Queued, 0)], 5);

        let summary = eng.tick(&hubs, Tick(0));
        assert_eq!(summary.departed, 1);
        assert_eq!(summary.advanced, 0);

        let s = eng.store.get(ShipmentId(1)).unwrap();
        assert_eq!(s.status, ShipmentStatus::InTransit);
        // Progress stays 0 in the departure tick.
        assert_eq!(s.progress_percent, 0);
    }

    #[test]
    fn departed_shipment_advances_on_the_next_tick() {
        let hubs = abc_directory();
        let mut eng = engine_with(vec![shipment(1, &["A", "B", "C"], ShipmentStatus::Queued, 0)], 5);

        eng.tick(&hubs, Tick(0));
        let summary = eng.tick(&hubs, Tick(1));
        assert_eq!(summary.advanced, 1);
        assert_eq!(eng.store.get(ShipmentId(1)).unwrap().progress_percent, 5);
    }

    #[test]
    fn back_to_back_ticks_step_exactly_once_each() {
        let hubs = abc_directory();
        let mut eng =
            engine_with(vec![shipment(1, &["A", "B", "C"], ShipmentStatus::InTransit, 10)], 5);

        eng.tick(&hubs, Tick(0));
        assert_eq!(eng.store.get(ShipmentId(1)).unwrap().progress_percent, 15);
        eng.tick(&hubs, Tick(1));
        assert_eq!(eng.store.get(ShipmentId(1)).unwrap().progress_percent, 20);
    }

    #[test]
    fn progress_is_monotonic_until_delivery() {
        let hubs = abc_directory();
        let mut eng = engine_with(vec![shipment(1, &["A", "B", "C"], ShipmentStatus::Queued, 0)], 5);

        let mut last = 0u8;
        for t in 0..40 {
            eng.tick(&hubs, Tick(t));
            let s = eng.store.get(ShipmentId(1)).unwrap();
            assert!(s.progress_percent >= last, "regressed at tick {t}");
            last = s.progress_percent;
        }
        let s = eng.store.get(ShipmentId(1)).unwrap();
        assert_eq!(s.status, ShipmentStatus::Delivered);
        assert_eq!(s.progress_percent, 100);
    }

    #[test]
    fn delivery_clamps_overshoot_to_exactly_hundred() {
        let hubs = abc_directory();
        // 98 + 5 = 103 → must be stored as 100, never 103.
        let mut eng =
            engine_with(vec![shipment(1, &["A", "B", "C"], ShipmentStatus::InTransit, 98)], 5);

        let summary = eng.tick(&hubs, Tick(0));
        assert_eq!(summary.delivered, 1);

        let s = eng.store.get(ShipmentId(1)).unwrap();
        assert_eq!(s.status, ShipmentStatus::Delivered);
        assert_eq!(s.progress_percent, 100);
        // Final position is pinned to the destination hub.
        assert_eq!(s.position, GeoPoint::new(10.0, 10.0));
    }

    #[test]
    fn delivered_shipments_are_never_touched_again() {
        let hubs = abc_directory();
        let mut eng =
            engine_with(vec![shipment(1, &["A", "B", "C"], ShipmentStatus::InTransit, 99)], 5);

        eng.tick(&hubs, Tick(0));
        let delivered = eng.store.get(ShipmentId(1)).unwrap().clone();
        assert_eq!(delivered.status, ShipmentStatus::Delivered);

        for t in 1..5 {
            let summary = eng.tick(&hubs, Tick(t));
            assert_eq!(summary, crate::TickSummary::default());
        }
        assert_eq!(eng.store.get(ShipmentId(1)).unwrap(), &delivered);
    }

    #[test]
    fn unresolved_hub_skips_coordinate_but_not_progress() {
        // Directory is missing hub B, which the current leg needs.
        let hubs = HubDirectory::new([hub("A", 0.0, 0.0), hub("C", 10.0, 10.0)]);
        let mut eng =
            engine_with(vec![shipment(1, &["A", "B", "C"], ShipmentStatus::InTransit, 20)], 5);

        let before = eng.store.get(ShipmentId(1)).unwrap().position;
        let summary = eng.tick(&hubs, Tick(0));

        assert_eq!(summary.coordinate_skips, 1);
        assert_eq!(summary.advanced, 1);

        let s = eng.store.get(ShipmentId(1)).unwrap();
        assert_eq!(s.progress_percent, 25);
        assert_eq!(s.position, before, "stale coordinate must be kept as-is");
    }

    #[test]
    fn rejected_save_does_not_abort_the_pass() {
        let hubs = abc_directory();
        let mut inner = InMemoryShipmentStore::new();
        inner
            .save(shipment(1, &["A", "B", "C"], ShipmentStatus::InTransit, 10))
            .unwrap();
        inner
            .save(shipment(2, &["A", "B", "C"], ShipmentStatus::InTransit, 10))
            .unwrap();
        let store = RejectingStore { inner, reject: ShipmentId(1) };
        let mut eng = MovementEngine::new(store, 5);

        let summary = eng.tick(&hubs, Tick(0));
        assert_eq!(summary.failed_saves, 1);

        // Shipment 1 keeps its old persisted state; shipment 2 advanced.
        assert_eq!(eng.store.get(ShipmentId(1)).unwrap().progress_percent, 10);
        assert_eq!(eng.store.get(ShipmentId(2)).unwrap().progress_percent, 15);
    }

    #[test]
    fn step_size_is_configurable() {
        let hubs = abc_directory();
        let mut eng =
            engine_with(vec![shipment(1, &["A", "B"], ShipmentStatus::InTransit, 0)], 25);

        for t in 0..4 {
            eng.tick(&hubs, Tick(t));
        }
        let s = eng.store.get(ShipmentId(1)).unwrap();
        assert_eq!(s.progress_percent, 100);
        assert_eq!(s.status, ShipmentStatus::Delivered);
    }
}

// ── HubDirectory ──────────────────────────────────────────────────────────────

mod directory {
    use super::*;
    use crate::HubLookup;

    #[test]
    fn lookup_and_require() {
        let hubs = abc_directory();
        assert_eq!(hubs.len(), 3);
        assert!(hubs.hub(&code("A")).is_some());
        assert!(hubs.hub(&code("Z")).is_none());
        assert!(hubs.require(&code("B")).is_ok());
        assert!(hubs.require(&code("Z")).is_err());
    }
}

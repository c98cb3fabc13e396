//! Unit tests for sky-core.

use crate::{GeoPoint, HubCode, ShipmentStatus, SimConfig, SimRng, Tick};

// ── Tick & clock ──────────────────────────────────────────────────────────────

mod time {
    use super::*;
    use crate::SimClock;

    #[test]
    fn tick_arithmetic() {
        assert_eq!(Tick(3) + 4, Tick(7));
        assert_eq!(Tick(10) - Tick(4), 6);
        assert_eq!(Tick::ZERO.offset(5), Tick(5));
    }

    #[test]
    fn cadence_due() {
        assert!(Tick(0).is_due(13));
        assert!(Tick(26).is_due(13));
        assert!(!Tick(27).is_due(13));
        // Interval 0 means "never fires", not "always fires".
        assert!(!Tick(0).is_due(0));
    }

    #[test]
    fn clock_advances_and_maps_to_wall_time() {
        let mut clock = SimClock::new(1_000, 60);
        assert_eq!(clock.current_unix_secs(), 1_000);
        clock.advance();
        clock.advance();
        assert_eq!(clock.current_tick, Tick(2));
        assert_eq!(clock.current_unix_secs(), 1_120);
    }

    #[test]
    fn config_validation() {
        assert!(SimConfig::default().validate().is_ok());

        let bad_step = SimConfig { step_percent: 0, ..SimConfig::default() };
        assert!(bad_step.validate().is_err());

        let bad_step = SimConfig { step_percent: 101, ..SimConfig::default() };
        assert!(bad_step.validate().is_err());

        let bad_movement = SimConfig {
            movement_interval_ticks: 0,
            ..SimConfig::default()
        };
        assert!(bad_movement.validate().is_err());
    }
}

// ── GeoPoint ──────────────────────────────────────────────────────────────────

mod geo {
    use super::*;

    #[test]
    fn lerp_endpoints_and_midpoint() {
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(10.0, -20.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), GeoPoint::new(5.0, -10.0));
    }

    #[test]
    fn haversine_one_degree_longitude_at_equator() {
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(0.0, 1.0);
        let d = a.distance_m(b);
        // One degree of longitude at the equator is ~111.2 km.
        assert!((d - 111_200.0).abs() < 1_000.0, "got {d}");
    }

    #[test]
    fn haversine_symmetric() {
        let a = GeoPoint::new(51.9, 4.5);
        let b = GeoPoint::new(1.3, 103.8);
        assert!((a.distance_m(b) - b.distance_m(a)).abs() < 1.0);
    }
}

// ── HubCode & status ──────────────────────────────────────────────────────────

mod model {
    use super::*;

    #[test]
    fn hub_code_blankness() {
        assert!(HubCode::from("").is_blank());
        assert!(HubCode::from("   ").is_blank());
        assert!(!HubCode::from("RTM").is_blank());
    }

    #[test]
    fn hub_code_borrows_as_str() {
        use std::collections::HashMap;
        let mut m: HashMap<HubCode, u32> = HashMap::new();
        m.insert(HubCode::from("SIN"), 7);
        assert_eq!(m.get("SIN"), Some(&7));
    }

    #[test]
    fn only_delivered_is_terminal() {
        assert!(!ShipmentStatus::Queued.is_terminal());
        assert!(!ShipmentStatus::InTransit.is_terminal());
        assert!(ShipmentStatus::Delivered.is_terminal());
    }

    #[test]
    fn status_display_matches_wire_names() {
        assert_eq!(ShipmentStatus::Queued.to_string(), "QUEUED");
        assert_eq!(ShipmentStatus::InTransit.to_string(), "IN_TRANSIT");
        assert_eq!(ShipmentStatus::Delivered.to_string(), "DELIVERED");
    }
}

// ── RNG determinism ───────────────────────────────────────────────────────────

mod rng {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = SimRng::new(99);
        let mut b = SimRng::new(99);
        for _ in 0..32 {
            assert_eq!(a.gen_range(0..1_000_000u32), b.gen_range(0..1_000_000u32));
        }
    }

    #[test]
    fn children_diverge_from_parent() {
        let mut root = SimRng::new(7);
        let mut c1 = root.child(1);
        let mut c2 = root.child(2);
        let s1: Vec<u32> = (0..8).map(|_| c1.gen_range(0..u32::MAX)).collect();
        let s2: Vec<u32> = (0..8).map(|_| c2.gen_range(0..u32::MAX)).collect();
        assert_ne!(s1, s2);
    }

    #[test]
    fn choose_multiple_distinct() {
        let mut rng = SimRng::new(1);
        let items = [1, 2, 3, 4, 5];
        let picked = rng.choose_multiple(&items, 2);
        assert_eq!(picked.len(), 2);
        assert_ne!(picked[0], picked[1]);
    }
}

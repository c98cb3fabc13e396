//! Geographic coordinate type.
//!
//! `GeoPoint` uses `f32` (single-precision) latitude/longitude.  At the
//! equator this gives ~1 m precision — more than sufficient for rendering a
//! shipment marker on a world map while halving memory vs. `f64`.

/// A WGS-84 geographic coordinate stored as single-precision floats.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f32,
    pub lon: f32,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f32, lon: f32) -> Self {
        Self { lat, lon }
    }

    /// Straight-line interpolation toward `other` in lat/lon space.
    ///
    /// `t` is the fraction travelled, normally in `[0, 1)`.  This is a
    /// deliberate flat-earth simplification: route legs are drawn as straight
    /// segments, not great-circle arcs.
    #[inline]
    pub fn lerp(self, other: GeoPoint, t: f32) -> GeoPoint {
        GeoPoint {
            lat: self.lat + (other.lat - self.lat) * t,
            lon: self.lon + (other.lon - self.lon) * t,
        }
    }

    /// Haversine great-circle distance in metres.
    ///
    /// Accuracy: ±0.5 % (f32 rounding) — used for order-log flavour, not for
    /// routing cost, so that is plenty.
    pub fn distance_m(self, other: GeoPoint) -> f32 {
        const R: f32 = 6_371_000.0; // mean Earth radius, metres

        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        R * c
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}

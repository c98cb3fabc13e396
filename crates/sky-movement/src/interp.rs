//! Multi-leg route position interpolation.
//!
//! A route of N hubs has N−1 legs.  Global progress is mapped onto a
//! continuous "leg-units travelled" value; the integer part selects the leg,
//! the fractional part interpolates linearly within it.  Legs are straight
//! segments in lat/lon space — an accepted simplification, not a geodesic
//! computation.

use sky_core::{GeoPoint, HubCode};

use crate::store::HubLookup;
use crate::MovementError;

/// Interpolated position along `route` at `progress_percent` (0–100).
///
/// # Errors
///
/// - [`MovementError::DegenerateRoute`] for routes shorter than 2 hubs.
/// - [`MovementError::UnresolvedHub`] if either endpoint of the current leg
///   is missing from `hubs`.  Callers treat this as "skip the coordinate
///   update this tick", not as a tick failure.
pub fn route_position<H: HubLookup>(
    route: &[HubCode],
    progress_percent: u8,
    hubs: &H,
) -> Result<GeoPoint, MovementError> {
    if route.len() < 2 {
        return Err(MovementError::DegenerateRoute);
    }

    let legs = route.len() - 1;
    let p = f32::from(progress_percent.min(100)) / 100.0;

    // Continuous leg-units travelled, then split into leg index + fraction.
    // The clamp keeps progress at exactly 100 % (or float error pushing
    // leg_span to `legs`) on the final leg instead of indexing past the route.
    let leg_span = p * legs as f32;
    let leg_index = (leg_span.floor() as usize).min(legs - 1);
    let leg_fraction = leg_span - leg_index as f32;

    let from = resolve(hubs, &route[leg_index])?;
    let to = resolve(hubs, &route[leg_index + 1])?;

    Ok(from.position.lerp(to.position, leg_fraction))
}

fn resolve<'a, H: HubLookup>(
    hubs: &'a H,
    code: &HubCode,
) -> Result<&'a sky_core::Hub, MovementError> {
    hubs.hub(code)
        .ok_or_else(|| MovementError::UnresolvedHub(code.clone()))
}

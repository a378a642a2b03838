//! Geographic math for AR marker placement.
//!
//! Provides great-circle bearing and distance between WGS84 coordinates,
//! and the distance-compression curve that maps real-world distances into
//! the bounded AR coordinate space so near and far landmarks remain
//! simultaneously visible.
//!
//! All functions are pure. Non-finite inputs produce a [`GeoError`] rather
//! than propagating NaN into scene placement.

mod types;

pub use types::{GeoError, GeoPoint, EARTH_RADIUS_METERS};

/// Near compression segment: distances under this are placed at 2–3 m.
const NEAR_LIMIT_METERS: f64 = 100.0;

/// Mid compression segment: distances under this are placed at 3–4.5 m.
const MID_LIMIT_METERS: f64 = 500.0;

/// Span of the far segment; the curve is clamped beyond
/// `MID_LIMIT_METERS + FAR_SPAN_METERS` (2000 m).
const FAR_SPAN_METERS: f64 = 1500.0;

/// Minimum AR-space radius in meters.
pub const MIN_AR_RADIUS: f64 = 2.0;

/// Maximum AR-space radius in meters.
pub const MAX_AR_RADIUS: f64 = 6.0;

/// Initial great-circle bearing from one coordinate to another.
///
/// Uses the spherical trigonometry formula
/// `atan2(sin(Δlon)·cos(lat2), cos(lat1)·sin(lat2) − sin(lat1)·cos(lat2)·cos(Δlon))`.
///
/// # Returns
///
/// Bearing in radians, normalized to `[0, 2π)`, clockwise from north.
/// Errors if any horizontal component of either point is non-finite.
pub fn bearing(from: &GeoPoint, to: &GeoPoint) -> Result<f64, GeoError> {
    validate(from)?;
    validate(to)?;

    let lat1 = from.latitude.to_radians();
    let lon1 = from.longitude.to_radians();
    let lat2 = to.latitude.to_radians();
    let lon2 = to.longitude.to_radians();

    let dlon = lon2 - lon1;

    let y = dlon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * dlon.cos();

    let raw = y.atan2(x);

    // atan2 yields (-π, π]; normalize to [0, 2π). A tiny negative raw
    // value can round to exactly 2π under rem_euclid, so fold that back.
    let normalized = raw.rem_euclid(std::f64::consts::TAU);
    if normalized >= std::f64::consts::TAU {
        return Ok(0.0);
    }
    Ok(normalized)
}

/// Great-circle surface distance between two coordinates, via haversine.
///
/// Accurate to well under a meter for the distances this system works
/// with (the proximity radius never exceeds a few kilometers). Altitude
/// is ignored.
///
/// # Returns
///
/// Distance in meters, always non-negative. Errors if any horizontal
/// component of either point is non-finite.
pub fn surface_distance_meters(from: &GeoPoint, to: &GeoPoint) -> Result<f64, GeoError> {
    validate(from)?;
    validate(to)?;

    let lat1 = from.latitude.to_radians();
    let lat2 = to.latitude.to_radians();
    let dlat = (to.latitude - from.latitude).to_radians();
    let dlon = (to.longitude - from.longitude).to_radians();

    let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().asin();

    Ok(EARTH_RADIUS_METERS * c)
}

/// Compress a real-world distance into a bounded AR-space radius.
///
/// Three monotonic, continuous piecewise-linear segments keep close and
/// far landmarks simultaneously visible and distinguishable:
///
/// - `d < 100 m`  → 2.0–3.0 m
/// - `d < 500 m`  → 3.0–4.5 m
/// - `d ≥ 500 m`  → 4.5–6.0 m, clamped at 6.0 from 2000 m
///
/// Total for all inputs: negative and NaN distances are treated as zero.
pub fn compressed_radius(distance_meters: f64) -> f64 {
    let d = distance_meters.max(0.0);

    if d < NEAR_LIMIT_METERS {
        2.0 + (d / NEAR_LIMIT_METERS) * 1.0
    } else if d < MID_LIMIT_METERS {
        3.0 + ((d - NEAR_LIMIT_METERS) / (MID_LIMIT_METERS - NEAR_LIMIT_METERS)) * 1.5
    } else {
        4.5 + (((d - MID_LIMIT_METERS) / FAR_SPAN_METERS) * 1.5).min(1.5)
    }
}

fn validate(point: &GeoPoint) -> Result<(), GeoError> {
    if !point.latitude.is_finite() {
        return Err(GeoError::NonFiniteLatitude(point.latitude));
    }
    if !point.longitude.is_finite() {
        return Err(GeoError::NonFiniteLongitude(point.longitude));
    }
    Ok(())
}

//! Geofence gate: great-circle distance between the punch position and the
//! company center, checked against the allowed radius plus a GPS margin.

use crate::core::policy::Policy;
use crate::errors::{AppError, AppResult};
use crate::models::company::Company;

const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Haversine distance in meters between two (lat, lon) pairs in degrees.
pub fn haversine_m(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let delta_phi = (lat2 - lat1).to_radians();
    let delta_lambda = (lon2 - lon1).to_radians();

    let a = (delta_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (delta_lambda / 2.0).sin().powi(2);

    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_M * c
}

/// Reject coordinates that cannot come from a real device fix.
pub fn check_coordinates(lat: f64, lon: f64) -> AppResult<()> {
    if !lat.is_finite() || !lon.is_finite() {
        return Err(AppError::Validation("coordinates must be finite".into()));
    }
    if lat.abs() > 90.0 || lon.abs() > 180.0 {
        return Err(AppError::Validation(format!(
            "coordinates out of range: ({lat}, {lon})"
        )));
    }
    Ok(())
}

/// Validate a punch position against the company geofence.
///
/// Companies without a configured center skip the check entirely.
pub fn validate(company: &Company, lat: f64, lon: f64, policy: &Policy) -> AppResult<()> {
    check_coordinates(lat, lon)?;

    let Some((center_lat, center_lon)) = company.geofence_center() else {
        return Ok(());
    };

    let distance = haversine_m(lat, lon, center_lat, center_lon);

    let radius = if company.radius_m > 0 {
        company.radius_m
    } else {
        policy.default_radius_m
    };
    let allowed = radius as f64 + policy.geofence_margin_m;

    if distance > allowed {
        return Err(AppError::OutOfRange {
            distance_m: distance.round() as i64,
        });
    }

    Ok(())
}

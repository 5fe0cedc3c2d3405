use serde::Serialize;

/// Company settings the punch gate runs against: geofence center/radius and
/// the optional mandatory office NFC tag. Mutated only by the admin CLI,
/// never by the core.
#[derive(Debug, Clone, Serialize)]
pub struct Company {
    pub id: i64,
    pub name: String,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub radius_m: i64,
    pub office_tag: Option<String>,
}

impl Company {
    /// Geofencing is enforced only when a center is configured.
    pub fn geofence_center(&self) -> Option<(f64, f64)> {
        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => Some((lat, lon)),
            _ => None,
        }
    }

    /// Office mode: every punch must carry a scan of the office tag.
    pub fn office_mode(&self) -> bool {
        self.office_tag.as_deref().is_some_and(|t| !t.is_empty())
    }
}

use chrono::NaiveDate;
use serde::Serialize;

/// Leave/absence request kinds. Wire strings kept from the mobile protocol.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum IncidentKind {
    Vacaciones,
    Baja,
    AsuntosPropios,
    Olvido,
    HorasExtra,
}

impl IncidentKind {
    pub fn to_db_str(&self) -> &'static str {
        match self {
            IncidentKind::Vacaciones => "VACACIONES",
            IncidentKind::Baja => "BAJA",
            IncidentKind::AsuntosPropios => "ASUNTOS_PROPIOS",
            IncidentKind::Olvido => "OLVIDO",
            IncidentKind::HorasExtra => "HORAS_EXTRA",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "VACACIONES" => Some(IncidentKind::Vacaciones),
            "BAJA" => Some(IncidentKind::Baja),
            "ASUNTOS_PROPIOS" => Some(IncidentKind::AsuntosPropios),
            "OLVIDO" => Some(IncidentKind::Olvido),
            "HORAS_EXTRA" => Some(IncidentKind::HorasExtra),
            _ => None,
        }
    }

    /// Only absence kinds subtract from theoretical hours once approved.
    pub fn is_absence(&self) -> bool {
        matches!(
            self,
            IncidentKind::Vacaciones | IncidentKind::Baja | IncidentKind::AsuntosPropios
        )
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum IncidentStatus {
    Pendiente,
    Aprobada,
    Rechazada,
}

impl IncidentStatus {
    pub fn to_db_str(&self) -> &'static str {
        match self {
            IncidentStatus::Pendiente => "PENDIENTE",
            IncidentStatus::Aprobada => "APROBADA",
            IncidentStatus::Rechazada => "RECHAZADA",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "PENDIENTE" => Some(IncidentStatus::Pendiente),
            "APROBADA" => Some(IncidentStatus::Aprobada),
            "RECHAZADA" => Some(IncidentStatus::Rechazada),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Incident {
    pub id: i64,
    pub employee_id: i64,
    pub kind: IncidentKind,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: IncidentStatus,
    pub note: Option<String>,       // employee comment
    pub admin_note: Option<String>, // resolution comment
    pub created_at: String,         // ISO8601
}

impl Incident {
    pub fn covers(&self, day: NaiveDate) -> bool {
        self.start_date <= day && day <= self.end_date
    }
}

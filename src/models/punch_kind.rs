use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum PunchKind {
    Entry,
    Exit,
}

impl PunchKind {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            PunchKind::Entry => "ENTRY",
            PunchKind::Exit => "EXIT",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "ENTRY" => Some(PunchKind::Entry),
            "EXIT" => Some(PunchKind::Exit),
            _ => None,
        }
    }

    pub fn is_entry(&self) -> bool {
        matches!(self, PunchKind::Entry)
    }

    pub fn is_exit(&self) -> bool {
        matches!(self, PunchKind::Exit)
    }
}

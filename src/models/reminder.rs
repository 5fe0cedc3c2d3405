use serde::Serialize;

/// Reminder verdict codes. The Spanish wire strings are part of the mobile
/// client protocol and must not be translated.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum ReminderCode {
    HoyLibra,
    AunNoToca,
    FaltaEntrada,
    FaltaSalida,
    Trabajando,
    JornadaFinalizada,
}

impl ReminderCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReminderCode::HoyLibra => "HOY_LIBRA",
            ReminderCode::AunNoToca => "AUN_NO_TOCA",
            ReminderCode::FaltaEntrada => "FALTA_ENTRADA",
            ReminderCode::FaltaSalida => "FALTA_SALIDA",
            ReminderCode::Trabajando => "TRABAJANDO",
            ReminderCode::JornadaFinalizada => "JORNADA_FINALIZADA",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ReminderVerdict {
    pub code: ReminderCode,
    pub should_notify: bool,
    pub title: Option<String>,
    pub message: Option<String>,
}

impl ReminderVerdict {
    pub fn silent(code: ReminderCode) -> Self {
        Self {
            code,
            should_notify: false,
            title: None,
            message: None,
        }
    }

    pub fn notify(code: ReminderCode, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code,
            should_notify: true,
            title: Some(title.into()),
            message: Some(message.into()),
        }
    }
}

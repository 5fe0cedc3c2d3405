use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub company_id: i64,
    pub schedule_id: Option<i64>,
    pub nfc_tag: Option<String>,
    pub push_token: Option<String>,
}

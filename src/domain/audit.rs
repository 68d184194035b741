#[derive(Debug, Clone)]
pub struct Audit {
    pub id: i64,
    pub gqloperation: String,
    pub gqlquery: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

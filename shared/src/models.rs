use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

/// Identifier assigned by the API. Accepts JSON numbers or strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<i64> for RecordId {
    fn from(id: i64) -> Self {
        Self(id.to_string())
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Signed(i64),
            Unsigned(u64),
            Text(String),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Signed(n) => Self(n.to_string()),
            RawId::Unsigned(n) => Self(n.to_string()),
            RawId::Text(s) => Self(s),
        })
    }
}

// Treats `null` like a missing string so one bad field doesn't drop the record.
fn nullable_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn nullable_bool<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or_default())
}

// ============================================
// CUSTOMERS
// ============================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: RecordId,
    #[serde(default, deserialize_with = "nullable_string")]
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub tax_id: Option<String>,
    #[serde(default)]
    pub status: Option<String>, // activo, inactivo, moroso, ...
    #[serde(default)]
    pub balance: Option<Decimal>,
    #[serde(default)]
    pub credit_limit: Option<Decimal>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub last_activity_at: Option<String>,
}

// ============================================
// RECORDS
// ============================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: RecordId,
    #[serde(default, alias = "order_number", deserialize_with = "nullable_string")]
    pub number: String,
    #[serde(default)]
    pub client_id: Option<RecordId>,
    #[serde(default)]
    pub client_name: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>, // venta, suscripcion, servicio, ...
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub subtotal: Option<Decimal>,
    #[serde(default)]
    pub tax: Option<Decimal>,
    #[serde(default)]
    pub total: Option<Decimal>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: RecordId,
    #[serde(default)]
    pub client_id: Option<RecordId>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>, // pago, cargo, reembolso, ajuste
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub amount: Option<Decimal>,
    #[serde(default)]
    pub balance_after: Option<Decimal>,
    #[serde(default)]
    pub reference: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: RecordId,
    #[serde(default)]
    pub client_id: Option<RecordId>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default, alias = "content", deserialize_with = "nullable_string")]
    pub body: String,
    #[serde(default, rename = "type")]
    pub kind: Option<String>, // general, cobranza, soporte
    #[serde(default, deserialize_with = "nullable_bool")]
    pub is_read: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: RecordId,
    #[serde(default)]
    pub client_id: Option<RecordId>,
    #[serde(default)]
    pub channel: Option<String>, // email, sms, whatsapp
    #[serde(default)]
    pub direction: Option<String>, // entrante, saliente
    #[serde(default)]
    pub sender: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default, alias = "content", deserialize_with = "nullable_string")]
    pub body: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "nullable_bool")]
    pub is_read: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Any entry of a client's history, tagged by kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "record_type", rename_all = "snake_case")]
pub enum Record {
    Order(Order),
    Transaction(Transaction),
    Note(Note),
    Message(Message),
}

impl Record {
    pub fn id(&self) -> &RecordId {
        match self {
            Record::Order(o) => &o.id,
            Record::Transaction(t) => &t.id,
            Record::Note(n) => &n.id,
            Record::Message(m) => &m.id,
        }
    }

    pub fn timestamp(&self) -> Option<&str> {
        match self {
            Record::Order(o) => o.created_at.as_deref(),
            Record::Transaction(t) => t.created_at.as_deref(),
            Record::Note(n) => n.created_at.as_deref(),
            Record::Message(m) => m.created_at.as_deref(),
        }
    }

    /// Human label for the record kind.
    pub fn kind_label(&self) -> &'static str {
        match self {
            Record::Order(_) => "Pedido",
            Record::Transaction(_) => "Transacción",
            Record::Note(_) => "Nota",
            Record::Message(_) => "Mensaje",
        }
    }

    pub fn status(&self) -> Option<&str> {
        match self {
            Record::Order(o) => o.status.as_deref(),
            Record::Transaction(t) => t.status.as_deref(),
            Record::Note(_) => None,
            Record::Message(m) => m.status.as_deref(),
        }
    }

    pub fn amount(&self) -> Option<Decimal> {
        match self {
            Record::Order(o) => o.total,
            Record::Transaction(t) => t.amount,
            Record::Note(_) | Record::Message(_) => None,
        }
    }

    /// One-line description shown in activity feeds.
    pub fn headline(&self) -> &str {
        match self {
            Record::Order(o) => &o.number,
            Record::Transaction(t) => t
                .description
                .as_deref()
                .or(t.reference.as_deref())
                .unwrap_or_default(),
            Record::Note(n) => &n.body,
            Record::Message(m) => m.subject.as_deref().unwrap_or(&m.body),
        }
    }
}

// ============================================
// DASHBOARD
// ============================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardStats {
    pub total_clients: i64,
    pub active_clients: i64,
    pub total_revenue: Option<Decimal>,
    pub outstanding_balance: Option<Decimal>,
    pub orders_this_month: i64,
    pub pending_orders: i64,
    pub unread_messages: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub id: RecordId,
    #[serde(default)]
    pub severity: Option<String>, // critica, alta, media, baja
    #[serde(default, deserialize_with = "nullable_string")]
    pub title: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub client_id: Option<RecordId>,
    #[serde(default)]
    pub client_name: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

// ============================================
// REQUESTS / ENVELOPES
// ============================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewNote {
    pub body: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

/// List endpoints answer with either a bare array or a `{ "data": [...] }` envelope.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ListResponse<T> {
    Bare(Vec<T>),
    Envelope { data: Vec<T> },
}

impl<T> ListResponse<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            ListResponse::Bare(items) => items,
            ListResponse::Envelope { data } => data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_record_id_accepts_numbers_and_strings() {
        let numeric: RecordId = serde_json::from_value(json!(42)).unwrap();
        let text: RecordId = serde_json::from_value(json!("ord-7")).unwrap();

        assert_eq!(numeric.as_str(), "42");
        assert_eq!(text.as_str(), "ord-7");
        assert_eq!(serde_json::to_value(&numeric).unwrap(), json!("42"));
    }

    #[test]
    fn test_order_tolerates_missing_and_null_fields() {
        let order: Order = serde_json::from_value(json!({
            "id": 1,
            "order_number": "A1",
            "type": "venta",
            "status": null,
            "total": 50
        }))
        .unwrap();

        assert_eq!(order.number, "A1");
        assert_eq!(order.kind.as_deref(), Some("venta"));
        assert_eq!(order.status, None);
        assert_eq!(order.total, Some(dec("50")));
        assert_eq!(order.subtotal, None);
        assert_eq!(order.created_at, None);
    }

    #[test]
    fn test_monetary_fields_accept_numeric_strings() {
        let tx: Transaction = serde_json::from_value(json!({
            "id": "t1",
            "type": "pago",
            "amount": "-125.50"
        }))
        .unwrap();

        assert_eq!(tx.amount, Some(dec("-125.50")));
    }

    #[test]
    fn test_note_defaults_and_aliases() {
        let note: Note = serde_json::from_value(json!({
            "id": 3,
            "content": "Llamar el lunes",
            "is_read": null
        }))
        .unwrap();

        assert_eq!(note.body, "Llamar el lunes");
        assert!(!note.is_read);
    }

    #[test]
    fn test_list_response_shapes() {
        let bare: ListResponse<Client> =
            serde_json::from_value(json!([{ "id": 1, "name": "Acme" }])).unwrap();
        let envelope: ListResponse<Client> =
            serde_json::from_value(json!({ "data": [{ "id": 2, "name": "Beta" }], "meta": {} }))
                .unwrap();

        assert_eq!(bare.into_vec()[0].name, "Acme");
        assert_eq!(envelope.into_vec()[0].id.as_str(), "2");
    }

    #[test]
    fn test_record_accessors() {
        let record = Record::Transaction(Transaction {
            id: RecordId::from("t9"),
            client_id: None,
            kind: Some("cargo".into()),
            status: Some("completado".into()),
            amount: Some(dec("10.00")),
            balance_after: None,
            reference: Some("REF-9".into()),
            description: None,
            created_at: Some("2024-03-01".into()),
        });

        assert_eq!(record.id().as_str(), "t9");
        assert_eq!(record.timestamp(), Some("2024-03-01"));
        assert_eq!(record.status(), Some("completado"));
        assert_eq!(record.amount(), Some(dec("10.00")));
        assert_eq!(record.headline(), "REF-9");
        assert_eq!(record.kind_label(), "Transacción");
    }

    #[test]
    fn test_dashboard_stats_defaults() {
        let stats: DashboardStats =
            serde_json::from_value(json!({ "total_clients": 12 })).unwrap();

        assert_eq!(stats.total_clients, 12);
        assert_eq!(stats.pending_orders, 0);
        assert_eq!(stats.total_revenue, None);
    }
}

//! Client-side filtering for the table views.
//!
//! Filtering is a stable linear scan that borrows from the source slice, so it
//! is cheap enough to rerun on every keystroke and never touches the records.

use crate::format::is_blank;
use crate::models::{Client, Message, Note, Order, Record, Transaction};

/// Dropdown value meaning "don't filter on this field".
pub const MATCH_ALL: &str = "Todos";

/// A type or status constraint.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Selector {
    #[default]
    Any,
    Exactly(String),
}

impl Selector {
    /// Parses a dropdown choice; blank and [`MATCH_ALL`] mean [`Selector::Any`].
    pub fn from_choice(choice: &str) -> Self {
        let choice = choice.trim();
        if choice.is_empty() || choice == MATCH_ALL {
            Selector::Any
        } else {
            Selector::Exactly(choice.to_string())
        }
    }

    /// The dropdown value this selector corresponds to.
    pub fn as_choice(&self) -> &str {
        match self {
            Selector::Any => MATCH_ALL,
            Selector::Exactly(value) => value,
        }
    }

    pub fn accepts(&self, value: Option<&str>) -> bool {
        match self {
            Selector::Any => true,
            Selector::Exactly(expected) => value == Some(expected.as_str()),
        }
    }
}

/// Search and dropdown constraints, combined with AND.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub search: String,
    pub kind: Selector,
    pub status: Selector,
}

impl FilterCriteria {
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = term.into();
        self
    }

    pub fn with_kind(mut self, kind: Selector) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_status(mut self, status: Selector) -> Self {
        self.status = status;
        self
    }

    pub fn is_match_all(&self) -> bool {
        self.search.trim().is_empty() && self.kind == Selector::Any && self.status == Selector::Any
    }
}

/// Fields a record exposes to the filter engine.
pub trait Filterable {
    /// Text fields the search box looks at.
    fn search_fields(&self) -> Vec<&str>;

    /// Value compared against [`FilterCriteria::kind`].
    fn kind(&self) -> Option<&str> {
        None
    }

    /// Value compared against [`FilterCriteria::status`].
    fn status(&self) -> Option<&str> {
        None
    }
}

/// Records matching every criterion, in their original order.
pub fn filter_records<'a, T: Filterable>(records: &'a [T], criteria: &FilterCriteria) -> Vec<&'a T> {
    let needle = criteria.search.trim().to_lowercase();

    records
        .iter()
        .filter(|record| {
            criteria.kind.accepts(record.kind())
                && criteria.status.accepts(record.status())
                && matches_search(*record, &needle)
        })
        .collect()
}

fn matches_search<T: Filterable>(record: &T, needle: &str) -> bool {
    needle.is_empty()
        || record
            .search_fields()
            .into_iter()
            .filter(|field| !is_blank(field))
            .any(|field| field.to_lowercase().contains(needle))
}

/// Distinct non-blank values of a field in first-seen order, for dropdowns.
pub fn distinct_values<'a, T, F>(records: &'a [T], field: F) -> Vec<String>
where
    F: Fn(&'a T) -> Option<&'a str>,
{
    let mut seen: Vec<String> = Vec::new();
    for value in records.iter().filter_map(field) {
        let value = value.trim();
        if !is_blank(value) && !seen.iter().any(|v| v == value) {
            seen.push(value.to_string());
        }
    }
    seen
}

// ============================================
// IMPLEMENTATIONS
// ============================================

impl Filterable for Client {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str()];
        fields.extend(
            [&self.email, &self.company, &self.phone, &self.tax_id]
                .into_iter()
                .filter_map(|f| f.as_deref()),
        );
        fields
    }

    fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }
}

impl Filterable for Order {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.number.as_str()];
        fields.extend(self.client_name.as_deref());
        fields
    }

    fn kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }

    fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }
}

impl Filterable for Transaction {
    fn search_fields(&self) -> Vec<&str> {
        [&self.reference, &self.description]
            .into_iter()
            .filter_map(|f| f.as_deref())
            .collect()
    }

    fn kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }

    fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }
}

impl Filterable for Note {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.body.as_str()];
        fields.extend(self.author.as_deref());
        fields
    }

    fn kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }
}

impl Filterable for Message {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.body.as_str()];
        fields.extend(self.subject.as_deref());
        fields.extend(self.sender.as_deref());
        fields
    }

    fn kind(&self) -> Option<&str> {
        self.channel.as_deref()
    }

    fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }
}

impl Filterable for Record {
    fn search_fields(&self) -> Vec<&str> {
        match self {
            Record::Order(o) => o.search_fields(),
            Record::Transaction(t) => t.search_fields(),
            Record::Note(n) => n.search_fields(),
            Record::Message(m) => m.search_fields(),
        }
    }

    fn kind(&self) -> Option<&str> {
        match self {
            Record::Order(o) => Filterable::kind(o),
            Record::Transaction(t) => Filterable::kind(t),
            Record::Note(n) => Filterable::kind(n),
            Record::Message(m) => Filterable::kind(m),
        }
    }

    fn status(&self) -> Option<&str> {
        Record::status(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RecordId;
    use rust_decimal::Decimal;
    use serde_json::json;

    fn order(id: i64, number: &str, total: i64, kind: &str, status: &str) -> Order {
        Order {
            id: RecordId::from(id),
            number: number.to_string(),
            client_id: None,
            client_name: Some(format!("Cliente {id}")),
            kind: Some(kind.to_string()),
            status: Some(status.to_string()),
            subtotal: None,
            tax: None,
            total: Some(Decimal::from(total)),
            created_at: None,
        }
    }

    fn sample() -> Vec<Order> {
        vec![
            order(1, "A1", 50, "venta", "Completado"),
            order(2, "B2", 200, "servicio", "Pendiente"),
            order(3, "A10", 75, "venta", "Pendiente"),
            order(4, "C4", 10, "suscripcion", "Cancelado"),
        ]
    }

    fn ids(result: &[&Order]) -> Vec<String> {
        result.iter().map(|o| o.id.to_string()).collect()
    }

    #[test]
    fn test_match_all_keeps_everything_in_order() {
        let orders = sample();
        let criteria = FilterCriteria::default();

        let result = filter_records(&orders, &criteria);

        assert!(criteria.is_match_all());
        assert_eq!(ids(&result), vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let orders = vec![order(1, "A1", 50, "venta", "x"), order(2, "B2", 200, "venta", "x")];
        let criteria = FilterCriteria::default().with_search("a1");

        let result = filter_records(&orders, &criteria);

        assert_eq!(ids(&result), vec!["1"]);
    }

    #[test]
    fn test_search_checks_every_field() {
        let orders = sample();
        let criteria = FilterCriteria::default().with_search("  CLIENTE 4 ");

        assert_eq!(ids(&filter_records(&orders, &criteria)), vec!["4"]);
    }

    #[test]
    fn test_criteria_combine_with_and() {
        let orders = sample();
        let criteria = FilterCriteria::default()
            .with_search("a")
            .with_kind(Selector::from_choice("venta"))
            .with_status(Selector::from_choice("Pendiente"));

        assert_eq!(ids(&filter_records(&orders, &criteria)), vec!["3"]);
    }

    #[test]
    fn test_selector_is_exact() {
        let orders = sample();
        let criteria = FilterCriteria::default().with_status(Selector::from_choice("pendiente"));

        assert!(filter_records(&orders, &criteria).is_empty());
    }

    #[test]
    fn test_missing_field_only_matches_any() {
        let mut orders = sample();
        orders[0].status = None;
        let criteria = FilterCriteria::default().with_status(Selector::from_choice("Completado"));

        assert!(filter_records(&orders, &criteria).is_empty());
        assert_eq!(filter_records(&orders, &FilterCriteria::default()).len(), 4);
    }

    #[test]
    fn test_result_is_subset_and_input_untouched() {
        let orders = sample();
        let before = orders.clone();
        let criteria = FilterCriteria::default().with_search("2");

        let result = filter_records(&orders, &criteria);

        assert!(result.iter().all(|r| orders.iter().any(|o| o.id == r.id)));
        assert_eq!(orders, before);
    }

    #[test]
    fn test_sentinel_fields_are_not_searchable() {
        let mut orders = sample();
        orders[1].client_name = Some("NO_DICE".into());
        let criteria = FilterCriteria::default().with_search("dice");

        assert!(filter_records(&orders, &criteria).is_empty());
    }

    #[test]
    fn test_selector_from_choice() {
        assert_eq!(Selector::from_choice("Todos"), Selector::Any);
        assert_eq!(Selector::from_choice(""), Selector::Any);
        assert_eq!(Selector::from_choice(" venta "), Selector::Exactly("venta".into()));
        assert_eq!(Selector::Any.as_choice(), MATCH_ALL);
    }

    #[test]
    fn test_choice_round_trip_and_match_all() {
        for choice in ["", "Todos", "venta"] {
            let selector = Selector::from_choice(choice);
            assert_eq!(Selector::from_choice(selector.as_choice()), selector);
        }
        assert_eq!(Selector::from_choice("").as_choice(), MATCH_ALL);

        assert!(FilterCriteria::default().with_search("   ").is_match_all());
        assert!(!FilterCriteria::default().with_search("a").is_match_all());
        assert!(!kind("venta").is_match_all());
        assert!(!status("Pendiente").is_match_all());
    }

    #[test]
    fn test_distinct_values_first_seen_order() {
        let mut orders = sample();
        orders[3].kind = Some("NO_DICE".into());

        let kinds = distinct_values(&orders, |o| o.kind.as_deref());

        assert_eq!(kinds, vec!["venta", "servicio"]);
    }

    #[test]
    fn test_record_delegates_fields() {
        let records: Vec<Record> = sample().into_iter().map(Record::Order).collect();
        let criteria = FilterCriteria::default().with_kind(Selector::from_choice("servicio"));

        let result = filter_records(&records, &criteria);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id().as_str(), "2");
    }

    fn search(term: &str) -> FilterCriteria {
        FilterCriteria::default().with_search(term)
    }

    fn kind(choice: &str) -> FilterCriteria {
        FilterCriteria::default().with_kind(Selector::from_choice(choice))
    }

    fn status(choice: &str) -> FilterCriteria {
        FilterCriteria::default().with_status(Selector::from_choice(choice))
    }

    #[test]
    fn test_client_fields() {
        let client: Client = serde_json::from_value(json!({
            "id": 17,
            "name": "Ferretería Luna",
            "email": "compras@luna.mx",
            "phone": "555-0101",
            "company": "Luna SA",
            "tax_id": "LUN010101AB1",
            "address": "Calle 5",
            "status": "activo"
        }))
        .unwrap();
        let clients = vec![client];

        for term in ["ferre", "COMPRAS@", "0101", "luna sa", "lun010"] {
            assert_eq!(filter_records(&clients, &search(term)).len(), 1, "{term}");
        }
        // Neither the id nor the address is searchable.
        assert!(filter_records(&clients, &search("17")).is_empty());
        assert!(filter_records(&clients, &search("calle")).is_empty());

        assert_eq!(filter_records(&clients, &status("activo")).len(), 1);
        assert!(filter_records(&clients, &status("moroso")).is_empty());
        // Clients have no type, so only "Todos" lets them through.
        assert_eq!(filter_records(&clients, &kind("Todos")).len(), 1);
        assert!(filter_records(&clients, &kind("activo")).is_empty());
    }

    #[test]
    fn test_transaction_fields() {
        let tx: Transaction = serde_json::from_value(json!({
            "id": "tx-9",
            "type": "pago",
            "status": "aplicado",
            "amount": "-150.00",
            "reference": "REF-2024-01",
            "description": "Abono factura 33"
        }))
        .unwrap();
        let txs = vec![tx];

        assert_eq!(filter_records(&txs, &search("ref-2024")).len(), 1);
        assert_eq!(filter_records(&txs, &search("factura")).len(), 1);
        assert!(filter_records(&txs, &search("pago")).is_empty());
        assert_eq!(filter_records(&txs, &kind("pago")).len(), 1);
        assert!(filter_records(&txs, &kind("cargo")).is_empty());
        assert_eq!(filter_records(&txs, &status("aplicado")).len(), 1);
    }

    #[test]
    fn test_note_fields() {
        let note: Note = serde_json::from_value(json!({
            "id": 3,
            "author": "Marta",
            "content": "Llamar el lunes",
            "type": "cobranza",
            "is_read": false
        }))
        .unwrap();
        let notes = vec![note];

        assert_eq!(filter_records(&notes, &search("lunes")).len(), 1);
        assert_eq!(filter_records(&notes, &search("marta")).len(), 1);
        assert_eq!(filter_records(&notes, &kind("cobranza")).len(), 1);
        assert!(filter_records(&notes, &kind("soporte")).is_empty());
        // Notes carry no status.
        assert_eq!(filter_records(&notes, &status("Todos")).len(), 1);
        assert!(filter_records(&notes, &status("cobranza")).is_empty());
    }

    #[test]
    fn test_message_fields() {
        let message: Message = serde_json::from_value(json!({
            "id": 8,
            "channel": "whatsapp",
            "direction": "entrante",
            "sender": "Pedro Ruiz",
            "subject": "Duda con el cargo",
            "body": "No reconozco el último cobro",
            "status": "recibido",
            "is_read": false
        }))
        .unwrap();
        let messages = vec![message];

        assert_eq!(filter_records(&messages, &search("pedro")).len(), 1);
        assert_eq!(filter_records(&messages, &search("duda")).len(), 1);
        assert_eq!(filter_records(&messages, &search("reconozco")).len(), 1);
        assert!(filter_records(&messages, &search("entrante")).is_empty());
        // The channel is the message's type.
        assert_eq!(filter_records(&messages, &kind("whatsapp")).len(), 1);
        assert!(filter_records(&messages, &kind("email")).is_empty());
        assert_eq!(filter_records(&messages, &status("recibido")).len(), 1);
    }
}

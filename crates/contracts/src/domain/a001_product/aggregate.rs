use crate::domain::common::AggregateId;
use crate::shared::date_format::{format_epoch_millis, format_timestamp, DisplayZone};
use crate::shared::envelope::{
    as_count, display_text, extract_record, first_present, is_present, read_list, FieldPath,
    ListPage, PLACEHOLDER,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub i64);

impl ProductId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl AggregateId for ProductId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        s.trim()
            .parse::<i64>()
            .map(ProductId::new)
            .map_err(|e| format!("Invalid product id '{}': {}", s, e))
    }
}

// ============================================================================
// Normalized record
// ============================================================================

const ID_PATHS: [FieldPath; 2] = [FieldPath::new(&["id"]), FieldPath::new(&["id_barang"])];
const SUB_NAME_PATHS: [FieldPath; 2] = [
    FieldPath::new(&["subName"]),
    FieldPath::new(&["sub_name"]),
];

/// Product as the views consume it.
///
/// `raw` keeps every field the API sent; the three display fields are
/// computed on top of it. Serializing gives the raw record with the
/// display fields merged in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRow {
    #[serde(rename = "categoryName")]
    pub category_name: String,

    #[serde(rename = "subName")]
    pub sub_name: String,

    #[serde(rename = "updatedAtFormatted")]
    pub updated_at_formatted: String,

    #[serde(flatten)]
    pub raw: Map<String, Value>,
}

impl ProductRow {
    /// Build a row from one raw record. The input is not modified; a
    /// non-object record yields a row with no raw fields.
    pub fn from_raw(raw: &Value, zone: DisplayZone) -> Self {
        let mut fields = raw.as_object().cloned().unwrap_or_default();
        let category_name = category_name(raw);
        let sub_name = first_present(raw, &SUB_NAME_PATHS)
            .map(display_text)
            .unwrap_or_default();
        let updated_at_formatted = updated_at(raw, zone);

        // Computed fields win over same-named raw ones.
        fields.remove("categoryName");
        fields.remove("subName");
        fields.remove("updatedAtFormatted");

        Self {
            category_name,
            sub_name,
            updated_at_formatted,
            raw: fields,
        }
    }

    pub fn id(&self) -> Option<ProductId> {
        ID_PATHS
            .iter()
            .filter_map(|path| path.resolve_map(&self.raw))
            .filter(|v| is_present(v))
            .find_map(as_count)
            .and_then(|n| i64::try_from(n).ok())
            .map(ProductId::new)
    }

    pub fn name(&self) -> &str {
        self.raw.get("name").and_then(Value::as_str).unwrap_or("")
    }

    /// Raw field as text, empty when absent. Used to prefill forms.
    pub fn field_text(&self, key: &str) -> String {
        self.raw.get(key).map(display_text).unwrap_or_default()
    }
}

fn category_name(raw: &Value) -> String {
    match raw.get("category") {
        Some(Value::Object(category)) => category
            .get("name")
            .filter(|name| is_present(name))
            .map(display_text)
            .unwrap_or_else(|| PLACEHOLDER.to_string()),
        Some(Value::Array(_)) => PLACEHOLDER.to_string(),
        Some(value) if is_present(value) => display_text(value),
        _ => PLACEHOLDER.to_string(),
    }
}

fn updated_at(raw: &Value, zone: DisplayZone) -> String {
    let formatted = match raw.get("updated_at").filter(|v| is_present(v)) {
        Some(Value::String(s)) => Some(format_timestamp(s, zone)),
        Some(Value::Number(n)) => n.as_i64().and_then(|ms| format_epoch_millis(ms, zone)),
        _ => None,
    };
    formatted.unwrap_or_else(|| PLACEHOLDER.to_string())
}

/// Normalize a product list envelope.
pub fn normalize_list(envelope: &Value, zone: DisplayZone) -> ListPage<ProductRow> {
    read_list(envelope, |raw| ProductRow::from_raw(raw, zone))
}

/// Normalize a product detail envelope; `None` when `data` is not a record.
pub fn normalize_detail(envelope: &Value, zone: DisplayZone) -> Option<ProductRow> {
    extract_record(envelope).map(|record| ProductRow::from_raw(&Value::Object(record.clone()), zone))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(raw: Value) -> ProductRow {
        ProductRow::from_raw(&raw, DisplayZone::utc())
    }

    #[test]
    fn category_from_nested_object() {
        let r = row(json!({ "id": 1, "category": { "name": "Drinks", "id": 3 } }));
        assert_eq!(r.category_name, "Drinks");
    }

    #[test]
    fn category_from_flat_string() {
        assert_eq!(row(json!({ "category": "Snacks" })).category_name, "Snacks");
    }

    #[test]
    fn category_missing_or_empty_is_placeholder() {
        assert_eq!(row(json!({ "id": 1 })).category_name, "-");
        assert_eq!(row(json!({ "category": null })).category_name, "-");
        assert_eq!(row(json!({ "category": "" })).category_name, "-");
        assert_eq!(row(json!({ "category": { "id": 3 } })).category_name, "-");
        assert_eq!(row(json!({ "category": [] })).category_name, "-");
    }

    #[test]
    fn sub_name_prefers_camel_case() {
        assert_eq!(row(json!({ "subName": "A", "sub_name": "B" })).sub_name, "A");
        assert_eq!(row(json!({ "subName": "", "sub_name": "B" })).sub_name, "B");
        assert_eq!(row(json!({})).sub_name, "");
    }

    #[test]
    fn updated_at_is_formatted_or_placeholder() {
        let r = row(json!({ "updated_at": "2024-01-05T10:30:00Z" }));
        assert_eq!(r.updated_at_formatted, "05/01/2024 10:30");

        let wib = ProductRow::from_raw(
            &json!({ "updated_at": "2024-01-05T10:30:00Z" }),
            DisplayZone::default(),
        );
        assert_eq!(wib.updated_at_formatted, "05/01/2024 17:30");

        assert_eq!(row(json!({})).updated_at_formatted, "-");
        assert_eq!(row(json!({ "updated_at": "" })).updated_at_formatted, "-");
    }

    #[test]
    fn formatted_date_has_display_shape() {
        let r = row(json!({ "updated_at": "2024-01-05T10:30:00Z" }));
        let s = r.updated_at_formatted.as_bytes();
        assert_eq!(s.len(), 16);
        assert_eq!((s[2], s[5], s[10], s[13]), (b'/', b'/', b' ', b':'));
    }

    #[test]
    fn raw_fields_pass_through_and_input_is_untouched() {
        let raw = json!({
            "id": 7,
            "name": "Es Teh",
            "price": 5000,
            "subName": "Manis",
            "category": { "name": "Drinks" }
        });
        let before = raw.clone();
        let r = ProductRow::from_raw(&raw, DisplayZone::utc());
        assert_eq!(raw, before);

        assert_eq!(r.raw.get("price"), Some(&json!(5000)));
        assert_eq!(r.name(), "Es Teh");
        assert_eq!(r.id(), Some(ProductId::new(7)));

        let merged = serde_json::to_value(&r).unwrap();
        assert_eq!(merged["price"], json!(5000));
        assert_eq!(merged["categoryName"], json!("Drinks"));
        assert_eq!(merged["subName"], json!("Manis"));
        assert_eq!(merged["category"], json!({ "name": "Drinks" }));
    }

    #[test]
    fn non_object_record_still_gets_display_fields() {
        let r = row(json!(12));
        assert!(r.raw.is_empty());
        assert_eq!(r.category_name, "-");
        assert_eq!(r.updated_at_formatted, "-");
        assert_eq!(r.id(), None);
    }

    #[test]
    fn id_skips_unusable_candidates() {
        assert_eq!(row(json!({ "id": "abc", "id_barang": 5 })).id(), Some(ProductId::new(5)));
        assert_eq!(row(json!({ "id": 0, "id_barang": "9" })).id(), Some(ProductId::new(9)));
        assert_eq!(row(json!({ "id": "abc" })).id(), None);
    }

    #[test]
    fn list_normalization_keeps_order_and_total() {
        let envelope = json!({
            "data": {
                "data": [
                    { "id": 2, "category": "Snacks" },
                    { "id": 1, "category": { "name": "Drinks" } }
                ],
                "pagination": { "total": 25 }
            }
        });
        let page = normalize_list(&envelope, DisplayZone::utc());
        assert_eq!(page.total, 25);
        let ids: Vec<_> = page.items.iter().map(|r| r.id()).collect();
        assert_eq!(ids, vec![Some(ProductId::new(2)), Some(ProductId::new(1))]);
        assert_eq!(page.items[1].category_name, "Drinks");
    }

    #[test]
    fn detail_uses_data_object() {
        let envelope = json!({ "data": { "id_barang": "15", "name": "Kopi" } });
        let r = normalize_detail(&envelope, DisplayZone::utc()).unwrap();
        assert_eq!(r.id(), Some(ProductId::new(15)));
        assert_eq!(r.field_text("name"), "Kopi");

        assert!(normalize_detail(&json!({ "data": [] }), DisplayZone::utc()).is_none());
    }
}

use crate::shared::envelope::{display_text, extract_items};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Option of a category or addon select.
///
/// Built from `{name, id}`. Records missing either field are kept; the
/// missing side is `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LookupOption {
    pub label: Option<String>,
    pub value: Option<Value>,
}

impl LookupOption {
    pub fn from_raw(raw: &Value) -> Self {
        let field = |key: &str| raw.get(key).filter(|v| !v.is_null());
        Self {
            label: field("name").map(display_text),
            value: field("id").cloned(),
        }
    }

    pub fn label_text(&self) -> &str {
        self.label.as_deref().unwrap_or("")
    }

    /// Value as used for `<option value=..>`, empty when absent.
    pub fn value_key(&self) -> String {
        self.value.as_ref().map(display_text).unwrap_or_default()
    }
}

/// Lookup options of a category/addon list envelope.
pub fn lookup_options(envelope: &Value) -> Vec<LookupOption> {
    extract_items(envelope)
        .iter()
        .map(LookupOption::from_raw)
        .collect()
}

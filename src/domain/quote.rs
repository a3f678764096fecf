//! Global quote payload used to check that a symbol is tradable.

use std::collections::BTreeMap;

use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Quote {
    #[serde(rename = "Error Message", default)]
    pub error_message: Option<String>,
    #[serde(rename = "Global Quote", default)]
    pub fields: BTreeMap<String, String>,
}

impl Quote {
    pub fn has_error(&self) -> bool {
        self.error_message.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn symbol(&self) -> Option<&str> {
        self.fields.get("01. symbol").map(String::as_str)
    }

    pub fn price(&self) -> Option<f64> {
        self.fields.get("05. price").and_then(|p| p.parse().ok())
    }
}

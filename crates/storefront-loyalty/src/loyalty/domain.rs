use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// One completed purchase as recorded at checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseRecord {
    /// Epoch milliseconds.
    pub timestamp: i64,
    pub total_amount: f64,
    #[serde(default)]
    pub products: Vec<ProductLine>,
}

impl PurchaseRecord {
    pub fn new(timestamp: i64, total_amount: f64, product_names: &[&str]) -> Self {
        Self {
            timestamp,
            total_amount,
            products: product_names
                .iter()
                .map(|name| ProductLine::named(*name))
                .collect(),
        }
    }
}

/// Purchased line item. Only `name` participates in scoring; any other
/// fields the storefront attached are carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductLine {
    pub name: String,
    #[serde(flatten)]
    pub attributes: BTreeMap<String, Value>,
}

impl ProductLine {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: BTreeMap::new(),
        }
    }
}

/// Raised when a purchase record falls outside the scoring contract.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("purchase record {index} has invalid {field}: {reason}")]
pub struct InvalidRecordError {
    pub index: usize,
    pub field: &'static str,
    pub reason: String,
}

pub(crate) fn validate_records(records: &[PurchaseRecord]) -> Result<(), InvalidRecordError> {
    let mut running_total = 0.0_f64;
    for (index, record) in records.iter().enumerate() {
        if !record.total_amount.is_finite() {
            return Err(InvalidRecordError {
                index,
                field: "totalAmount",
                reason: format!("{} is not a finite amount", record.total_amount),
            });
        }

        if record.total_amount < 0.0 {
            return Err(InvalidRecordError {
                index,
                field: "totalAmount",
                reason: format!("{} is negative", record.total_amount),
            });
        }

        running_total += record.total_amount;
        if !running_total.is_finite() {
            return Err(InvalidRecordError {
                index,
                field: "totalAmount",
                reason: "cumulative spend overflows a finite amount".to_string(),
            });
        }
    }

    Ok(())
}

//! Loads purchase histories exported by the storefront.
//!
//! JSON exports use the checkout record shape (`timestamp`, `totalAmount`,
//! `products[].name`). CSV exports carry `timestamp,total_amount,products`
//! with product names separated by `;`.

mod parser;

use crate::loyalty::PurchaseRecord;
use std::io::Read;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum HistoryImportError {
    #[error("failed to read purchase history: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid purchase history JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid purchase history CSV: {0}")]
    Csv(#[from] csv::Error),
}

pub struct PurchaseHistoryImporter;

impl PurchaseHistoryImporter {
    /// Reads a history file, treating `.csv` files as CSV and anything else
    /// as JSON.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<PurchaseRecord>, HistoryImportError> {
        let path = path.as_ref();
        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("csv"))
            .unwrap_or(false);

        let file = std::fs::File::open(path)?;
        if is_csv {
            Self::from_csv_reader(file)
        } else {
            Self::from_json_reader(file)
        }
    }

    pub fn from_json_reader<R: Read>(reader: R) -> Result<Vec<PurchaseRecord>, HistoryImportError> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Vec<PurchaseRecord>, HistoryImportError> {
        Ok(parser::parse_csv(reader)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn imports_json_history_with_extra_product_fields() {
        let json = r#"[
            {
                "id": "TX1700000000000",
                "timestamp": 1700000000000,
                "totalAmount": 0.285,
                "status": "COMPLETED",
                "products": [
                    { "name": "Security Suite", "version": "premium", "discountedPrice": "0.238" },
                    { "name": "Tech Support" }
                ]
            }
        ]"#;

        let records = PurchaseHistoryImporter::from_json_reader(Cursor::new(json))
            .expect("json parses");

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].timestamp, 1_700_000_000_000);
        assert_eq!(records[0].products[0].name, "Security Suite");
        assert_eq!(
            records[0].products[0].attributes["version"],
            serde_json::json!("premium")
        );
    }

    #[test]
    fn imports_csv_history() {
        let csv = "timestamp,total_amount,products\n\
                   1700000000000,0.15,Security Suite;API Access\n\
                   1700086400000, 0.07 ,\n";

        let records =
            PurchaseHistoryImporter::from_csv_reader(Cursor::new(csv)).expect("csv parses");

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].products.len(), 2);
        assert_eq!(records[1].total_amount, 0.07);
        assert!(records[1].products.is_empty());
    }

    #[test]
    fn rejects_non_integer_timestamps() {
        let json = r#"[{ "timestamp": "yesterday", "totalAmount": 1.0, "products": [] }]"#;

        let err = PurchaseHistoryImporter::from_json_reader(Cursor::new(json))
            .expect_err("string timestamp rejected");

        assert!(matches!(err, HistoryImportError::Json(_)));
    }
}

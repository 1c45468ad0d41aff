use crate::loyalty::{ProductLine, PurchaseRecord};
use serde::{Deserialize, Deserializer};
use std::io::Read;

const PRODUCT_SEPARATOR: char = ';';

pub(crate) fn parse_csv<R: Read>(reader: R) -> Result<Vec<PurchaseRecord>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();

    for row in csv_reader.deserialize::<HistoryRow>() {
        records.push(row?.into_record());
    }

    Ok(records)
}

#[derive(Debug, Deserialize)]
struct HistoryRow {
    timestamp: i64,
    total_amount: f64,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    products: Option<String>,
}

impl HistoryRow {
    fn into_record(self) -> PurchaseRecord {
        let products = self
            .products
            .as_deref()
            .map(split_products)
            .unwrap_or_default();

        PurchaseRecord {
            timestamp: self.timestamp,
            total_amount: self.total_amount,
            products,
        }
    }
}

fn split_products(raw: &str) -> Vec<ProductLine> {
    raw.split(PRODUCT_SEPARATOR)
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(ProductLine::named)
        .collect()
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

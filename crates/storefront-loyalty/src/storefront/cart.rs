use super::catalog::{Edition, Product};
use super::pricing::{apply_discount, round3};
use crate::loyalty::{ProductLine, PurchaseRecord};
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Priced cart entry. The discount is captured when the line is added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub product_id: u32,
    pub name: String,
    pub edition: Edition,
    pub original_price: f64,
    pub discounted_price: f64,
    pub applied_discount: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartSummary {
    pub original_total: f64,
    pub discount_total: f64,
    pub final_total: f64,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CartError {
    #[error("cart is empty")]
    Empty,
    #[error("no cart line at position {index} (cart holds {len})")]
    OutOfRange { index: usize, len: usize },
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn add(&mut self, product: &Product, edition: Edition, discount: f64) -> &CartLine {
        let original_price = product.price(edition);
        self.lines.push(CartLine {
            product_id: product.id,
            name: product.name.to_string(),
            edition,
            original_price,
            discounted_price: apply_discount(original_price, discount),
            applied_discount: discount,
        });
        &self.lines[self.lines.len() - 1]
    }

    pub fn remove(&mut self, index: usize) -> Result<CartLine, CartError> {
        if index >= self.lines.len() {
            return Err(CartError::OutOfRange {
                index,
                len: self.lines.len(),
            });
        }
        Ok(self.lines.remove(index))
    }

    pub fn summary(&self) -> CartSummary {
        let original_total: f64 = self.lines.iter().map(|line| line.original_price).sum();
        let final_total: f64 = self.lines.iter().map(|line| line.discounted_price).sum();

        CartSummary {
            original_total: round3(original_total),
            discount_total: round3(original_total - final_total),
            final_total: round3(final_total),
        }
    }

    /// Converts the cart into a completed purchase and empties it.
    pub fn checkout(&mut self, now_ms: i64) -> Result<PurchaseRecord, CartError> {
        if self.lines.is_empty() {
            return Err(CartError::Empty);
        }

        let total_amount = self.summary().final_total;
        let products = self
            .lines
            .drain(..)
            .map(|line| {
                let mut product = ProductLine::named(line.name);
                product
                    .attributes
                    .insert("productId".to_string(), json!(line.product_id));
                product
                    .attributes
                    .insert("edition".to_string(), json!(line.edition.label()));
                product
                    .attributes
                    .insert("discountedPrice".to_string(), json!(line.discounted_price));
                product
            })
            .collect();

        Ok(PurchaseRecord {
            timestamp: now_ms,
            total_amount,
            products,
        })
    }
}

use super::{InvalidRecordError, LoyaltyEngine, LoyaltySnapshot, PurchaseRecord};
use crate::storefront::{
    Cart, CartLine, CartSummary, Catalog, Edition, SpendSummary, TransactionStats,
};
use serde::{Deserialize, Serialize};

/// Combines the scoring engine with the catalog to answer storefront queries.
#[derive(Debug, Clone)]
pub struct LoyaltyService {
    engine: LoyaltyEngine,
    catalog: Catalog,
}

impl LoyaltyService {
    pub fn new(engine: LoyaltyEngine, catalog: Catalog) -> Self {
        Self { engine, catalog }
    }

    pub fn engine(&self) -> &LoyaltyEngine {
        &self.engine
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn profile(
        &self,
        records: &[PurchaseRecord],
        now_ms: i64,
    ) -> Result<LoyaltyProfile, LoyaltyServiceError> {
        let snapshot = self.engine.analyze(records, now_ms)?.snapshot();
        let stats = TransactionStats::from_history(records);
        let spend = SpendSummary::new(stats.total_amount, snapshot.discount);

        Ok(LoyaltyProfile {
            snapshot,
            stats,
            spend,
        })
    }

    /// Prices the requested items at the discount the history earns.
    pub fn quote(
        &self,
        records: &[PurchaseRecord],
        now_ms: i64,
        items: &[QuoteItem],
    ) -> Result<PriceQuote, LoyaltyServiceError> {
        let snapshot = self.engine.analyze(records, now_ms)?.snapshot();
        let mut cart = Cart::new();

        for item in items {
            let product = self
                .catalog
                .get(item.product_id)
                .ok_or(LoyaltyServiceError::UnknownProduct(item.product_id))?;
            cart.add(product, item.edition, snapshot.discount);
        }

        Ok(PriceQuote {
            cohort: snapshot.cohort,
            discount: snapshot.discount,
            summary: cart.summary(),
            lines: cart.lines().to_vec(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LoyaltyProfile {
    #[serde(flatten)]
    pub snapshot: LoyaltySnapshot,
    pub stats: TransactionStats,
    pub spend: SpendSummary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteItem {
    pub product_id: u32,
    pub edition: Edition,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceQuote {
    pub cohort: super::Cohort,
    pub discount: f64,
    pub lines: Vec<CartLine>,
    pub summary: CartSummary,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LoyaltyServiceError {
    #[error(transparent)]
    InvalidRecord(#[from] InvalidRecordError),
    #[error("unknown product id {0}")]
    UnknownProduct(u32),
}

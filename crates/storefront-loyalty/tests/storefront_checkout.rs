use storefront_loyalty::loyalty::{Cohort, LoyaltyAnalysis, PurchaseRecord};
use storefront_loyalty::storefront::{
    apply_discount, Cart, Catalog, Edition, SpendSummary, TransactionStats,
};

const DAY_MS: i64 = 86_400_000;
const START_MS: i64 = 1_731_622_400_000;

fn current_discount(history: &[PurchaseRecord], now_ms: i64) -> (Cohort, f64) {
    let analysis = LoyaltyAnalysis::new(history, now_ms).expect("checkout history is valid");
    (analysis.compute_cohort(), analysis.compute_discount())
}

#[test]
fn repeat_customer_earns_larger_discounts_through_checkout() {
    let catalog = Catalog::standard();
    let mut history = Vec::new();
    let mut stats = TransactionStats::default();
    let mut cohorts = Vec::new();

    for (day, product) in catalog.products().iter().enumerate() {
        let now = START_MS + day as i64 * DAY_MS;
        let (cohort, discount) = current_discount(&history, now);
        cohorts.push(cohort);

        let mut cart = Cart::new();
        cart.add(product, Edition::Premium, discount);
        cart.add(product, Edition::Premium, discount);
        let record = cart.checkout(now).expect("cart has items");
        stats.record(record.total_amount);
        history.push(record);
    }

    assert_eq!(cohorts.first(), Some(&Cohort::Standard));
    assert!(cohorts.windows(2).all(|pair| pair[0] <= pair[1]));

    let final_now = START_MS + 6 * DAY_MS;
    let (cohort, discount) = current_discount(&history, final_now);
    assert!(cohort >= Cohort::Silver);
    assert_eq!(discount, cohort.discount());
    assert_eq!(stats, TransactionStats::from_history(&history));
    assert_eq!(stats.total_transactions, 6);
}

#[test]
fn dashboard_spend_summary_uses_current_discount() {
    let catalog = Catalog::standard();
    let security = catalog.get(3).expect("security suite");
    let mut cart = Cart::new();
    cart.add(security, Edition::Base, 0.0);
    let history = vec![cart.checkout(START_MS).expect("cart has items")];

    let (cohort, discount) = current_discount(&history, START_MS);
    let stats = TransactionStats::from_history(&history);
    let summary = SpendSummary::new(stats.total_amount, discount);

    assert_eq!(cohort, Cohort::Bronze);
    assert_eq!(summary.original, 0.15);
    assert_eq!(summary.discounted, apply_discount(0.15, 0.10));
    assert_eq!(summary.discount_percentage, 10);
}

use storefront_loyalty::history::PurchaseHistoryImporter;
use storefront_loyalty::loyalty::{Cohort, LoyaltyAnalysis, LoyaltyEngine, PurchaseRecord};

const DAY_MS: i64 = 86_400_000;
const NOW_MS: i64 = 1_731_622_400_000;

fn record(days_ago: i64, total_amount: f64, products: &[&str]) -> PurchaseRecord {
    PurchaseRecord::new(NOW_MS - days_ago * DAY_MS, total_amount, products)
}

#[test]
fn empty_history_defaults_to_standard_pricing() {
    let engine = LoyaltyEngine::default();
    let analysis = engine.analyze(&[], NOW_MS).expect("empty history is valid");

    let snapshot = analysis.snapshot();

    assert_eq!(snapshot.metrics.recency, 0.0);
    assert_eq!(snapshot.metrics.frequency, 0.0);
    assert_eq!(snapshot.metrics.monetary, 0.0);
    assert_eq!(snapshot.metrics.diversity, 0.0);
    assert_eq!(snapshot.cohort, Cohort::Standard);
    assert_eq!(snapshot.discount, 0.05);
}

#[test]
fn twelve_purchases_across_six_products_reach_premium() {
    let names = ["A", "B", "C", "D", "E", "F"];
    let history: Vec<_> = (0..12).map(|i| record(0, 1.0, &[names[i % 6]])).collect();

    let analysis = LoyaltyAnalysis::new(&history, NOW_MS).expect("valid history");

    assert_eq!(analysis.compute_cohort(), Cohort::Premium);
    assert_eq!(analysis.compute_discount(), 0.25);
}

#[test]
fn lapsed_customer_drops_cohorts_as_time_passes() {
    let history: Vec<_> = (0..5)
        .map(|i| record(i, 1.0, &[["A", "B", "C"][i as usize % 3]]))
        .collect();

    let cohort_at = |days_later: i64| {
        LoyaltyAnalysis::new(&history, NOW_MS + days_later * DAY_MS)
            .expect("valid history")
            .compute_cohort()
    };

    let fresh = cohort_at(0);
    let ten_months = cohort_at(300);
    let two_years = cohort_at(730);

    assert_eq!(fresh, Cohort::Gold);
    assert!(ten_months < fresh);
    assert!(two_years <= ten_months);
    assert_eq!(two_years, Cohort::Silver);
}

#[test]
fn scores_history_imported_from_disk() {
    let path = std::env::temp_dir().join(format!(
        "storefront-loyalty-history-{}.csv",
        std::process::id()
    ));
    let csv = format!(
        "timestamp,total_amount,products\n{},2.5,Security Suite;API Access\n{},2.5,Tech Support\n",
        NOW_MS - DAY_MS,
        NOW_MS
    );
    std::fs::write(&path, csv).expect("write history fixture");

    let history = PurchaseHistoryImporter::from_path(&path).expect("history imports");
    std::fs::remove_file(&path).ok();

    let snapshot = LoyaltyAnalysis::new(&history, NOW_MS)
        .expect("valid history")
        .snapshot();

    assert_eq!(history.len(), 2);
    assert_eq!(snapshot.metrics.recency, 1.0);
    assert_eq!(snapshot.metrics.monetary, 1.0);
    assert!((snapshot.metrics.diversity - 0.5).abs() < 1e-9);
    assert_eq!(snapshot.cohort, Cohort::Gold);
}

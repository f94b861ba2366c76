//! 면적 기준 표면처리 견적 테스트.
use metal_pricing_toolbox::catalog::RollingState;
use metal_pricing_toolbox::pricing::{price_finishing, quote_coil_finishing, FinishJob, PricingError};
use metal_pricing_toolbox::solve_coil;

fn assert_close(label: &str, actual: f64, expected: f64, tol: f64) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tol,
        "{label} expected {expected:.4} got {actual:.4} (diff {diff:.6}, tol {tol})"
    );
}

#[test]
fn cold_sheet_finishing_above_minimum() {
    let q = price_finishing(10.0, "N4 + PVC", 1.0, FinishJob::Sheet).expect("quote");
    assert_eq!(q.rolling, RollingState::Cold);
    assert_eq!(q.price_sqm, 34.08);
    assert_close("total", q.total, 340.8, 1e-9);
    assert!(!q.min_applied);
    assert_eq!(q.minimum_charge, 222.52);
}

#[test]
fn coil_job_uses_job_minimum() {
    let q = price_finishing(2.0, "n4", 1.0, FinishJob::Coil).expect("quote");
    assert_eq!(q.price_sqm, 9.84);
    assert_close("subtotal", q.subtotal, 19.68, 1e-9);
    assert_eq!(q.total, 145.0);
    assert!(q.min_applied);
}

#[test]
fn hot_rolled_finishing_by_thickness() {
    let q = price_finishing(5.0, "6mm n4 pvc", 6.0, FinishJob::Sheet).expect("quote");
    assert_eq!(q.rolling, RollingState::Hot);
    assert_eq!(q.price_sqm, 371.56);
    assert_close("total", q.total, 1857.8, 1e-9);
}

#[test]
fn unknown_finishes_fall_back_to_default_rates() {
    let cold = price_finishing(1.0, "brushed", 0.0, FinishJob::Sheet).expect("quote");
    assert_eq!(cold.price_sqm, 34.08);
    let hot = price_finishing(1.0, "brushed", 4.0, FinishJob::Coil).expect("quote");
    assert_eq!(hot.price_sqm, 325.40);
    let small = price_finishing(1.0, "brushed", 0.0, FinishJob::SmallCoil).expect("quote");
    assert_eq!(small.price_sqm, 58.53);
}

#[test]
fn small_coil_table_ignores_thickness() {
    let q = price_finishing(10.0, "PVC ONLY", 8.0, FinishJob::SmallCoil).expect("quote");
    assert_eq!(q.price_sqm, 31.35);
    assert_eq!(q.rolling, RollingState::Cold);
    assert_close("total", q.total, 313.5, 1e-9);
}

#[test]
fn zero_area_charges_the_minimum() {
    let q = price_finishing(0.0, "N4", 1.0, FinishJob::SmallCoil).expect("quote");
    assert_eq!(q.total, 145.0);
    assert!(q.min_applied);
}

#[test]
fn invalid_area_or_thickness() {
    assert_eq!(
        price_finishing(-1.0, "N4", 1.0, FinishJob::Sheet).map(|q| q.total),
        Err(PricingError::InvalidInput("면적은 0 이상이어야 합니다."))
    );
    assert!(price_finishing(f64::INFINITY, "N4", 1.0, FinishJob::Sheet).is_err());
    assert!(price_finishing(1.0, "N4", -0.5, FinishJob::Sheet).is_err());
}

#[test]
fn coil_finishing_uses_unrounded_area() {
    let coil = solve_coil(Some(5000.0), None, 508.0, 1219.0, 1.2, "304").expect("coil");
    let q = quote_coil_finishing(&coil, "N4 + PVC").expect("quote");
    assert_eq!(q.job, FinishJob::Coil);
    assert_eq!(q.minimum_charge, 145.0);
    assert_close("total", q.total, coil.area_m2 * 34.08, 0.005);
}

//! 코일 질량/외경/길이 환산 테스트.
use metal_pricing_toolbox::coil::{solve, CoilKnown, CoilSpecification, DEFAULT_INNER_DIAMETER_MM};
use metal_pricing_toolbox::{solve_coil, CoilError};

fn assert_close(label: &str, actual: f64, expected: f64, tol: f64) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tol,
        "{label} expected {expected:.4} got {actual:.4} (diff {diff:.6}, tol {tol})"
    );
}

#[test]
fn mass_to_outer_diameter() {
    let r = solve_coil(Some(5000.0), None, 508.0, 1219.0, 1.2, "304").expect("coil");
    assert_close("kg/m²", r.kg_per_sqm, 9.684, 1e-9);
    assert_close("length", r.length_m, 423.56, 0.01);
    assert_close("area", r.area_m2, r.length_m * 1.219, 1e-9);
    assert_close("od", r.outer_diameter_mm, 951.4, 0.1);
    assert!(r.outer_diameter_mm > r.inner_diameter_mm);
    assert!(!r.density_fallback);
}

#[test]
fn outer_diameter_round_trips_to_mass() {
    let forward = solve_coil(Some(5000.0), None, 508.0, 1219.0, 1.2, "304").expect("coil");
    let back = solve_coil(None, Some(forward.outer_diameter_mm), 508.0, 1219.0, 1.2, "304")
        .expect("coil");
    assert_close("mass", back.mass_kg, 5000.0, 1e-6);
    assert_close("length", back.length_m, forward.length_m, 1e-9);
}

#[test]
fn yield_ratios_are_consistent() {
    let r = solve_coil(None, Some(1200.0), 610.0, 1000.0, 0.8, "430").expect("coil");
    assert_close("kg/m² × m²/t", r.kg_per_sqm * r.sqm_per_ton, 1000.0, 1e-9);
    assert_close("kg/m² × m²/kg", r.kg_per_sqm * r.sqm_per_kg, 1.0, 1e-12);
    assert_close("mass", r.mass_kg, r.area_m2 * r.kg_per_sqm, 1e-9);
}

#[test]
fn default_inner_diameter_is_standard() {
    assert_eq!(DEFAULT_INNER_DIAMETER_MM, 508.0);
    let spec = CoilSpecification::from_options(Some(1000.0), None, DEFAULT_INNER_DIAMETER_MM, 1250.0, 2.0, "316")
        .expect("spec");
    assert_eq!(spec.known, CoilKnown::MassKg(1000.0));
    let r = solve(&spec).expect("coil");
    assert_eq!(r.inner_diameter_mm, 508.0);
}

#[test]
fn zero_inner_diameter_is_a_solid_roll() {
    let r = solve_coil(Some(100.0), None, 0.0, 100.0, 1.0, "304").expect("coil");
    assert!(r.outer_diameter_mm > 0.0);
}

#[test]
fn unknown_grade_uses_default_density() {
    let r = solve_coil(Some(1000.0), None, 508.0, 1000.0, 1.0, "duplex-x").expect("coil");
    assert!(r.density_fallback);
    assert_eq!(r.density, 8.07);
}

#[test]
fn grade_lookup_is_case_insensitive() {
    let alu = solve_coil(Some(1000.0), None, 508.0, 1000.0, 1.0, " aluminium ").expect("coil");
    assert_eq!(alu.density, 2.7);
    assert!(!alu.density_fallback);
    // 같은 질량이면 가벼운 재질일수록 길이가 길다.
    let steel = solve_coil(Some(1000.0), None, 508.0, 1000.0, 1.0, "304").expect("coil");
    assert!(alu.length_m > steel.length_m);
}

#[test]
fn rounded_copy_for_display() {
    let r = solve_coil(Some(5000.0), None, 508.0, 1219.0, 1.2, "304").expect("coil");
    let shown = r.rounded();
    assert_eq!(shown.kg_per_sqm, 9.684);
    assert_eq!(shown.mass_kg, 5000.0);
    assert_eq!(shown.outer_diameter_mm, (r.outer_diameter_mm * 10.0).round() / 10.0);
    assert_eq!(shown.sqm_per_ton, 103.26);
}

#[test]
fn invalid_inputs_are_rejected() {
    let cases = [
        solve_coil(None, None, 508.0, 1000.0, 1.0, "304"),
        solve_coil(Some(1000.0), Some(900.0), 508.0, 1000.0, 1.0, "304"),
        solve_coil(Some(1000.0), None, 508.0, 0.0, 1.0, "304"),
        solve_coil(Some(1000.0), None, 508.0, 1000.0, -1.0, "304"),
        solve_coil(Some(0.0), None, 508.0, 1000.0, 1.0, "304"),
        solve_coil(None, Some(508.0), 508.0, 1000.0, 1.0, "304"),
        solve_coil(None, Some(400.0), 508.0, 1000.0, 1.0, "304"),
        solve_coil(Some(1000.0), None, -1.0, 1000.0, 1.0, "304"),
        solve_coil(Some(f64::NAN), None, 508.0, 1000.0, 1.0, "304"),
    ];
    for (i, case) in cases.iter().enumerate() {
        assert!(
            matches!(case, Err(CoilError::InvalidInput(_))),
            "case {i} should fail: {case:?}"
        );
    }
}

//! 사이즈 해석 규칙 회귀 테스트. 원형관 허용오차와 각관/평철/앵글 정확 일치의 비대칭을 고정한다.
use metal_pricing_toolbox::catalog::{list_sizes, GeometryKind, RollingState};
use metal_pricing_toolbox::size_resolver::{
    composite_key, match_within_tolerance, resolve_pipe, resolve_round, resolve_size,
    RoundMatch, SizeKey, SizeQuery,
};

static SPARSE: &[f64] = &[25.0, 28.0];

fn round_key(size: f64) -> Option<SizeKey> {
    resolve_size(GeometryKind::Round, &SizeQuery::Numeric(size), None)
}

#[test]
fn round_within_one_mm_resolves_to_catalog_entry() {
    assert_eq!(round_key(25.4), Some(SizeKey::Diameter(25.0)));
    assert_eq!(round_key(25.0), Some(SizeKey::Diameter(25.0)));
}

#[test]
fn round_tolerance_is_inclusive_and_rejects_beyond_one_mm() {
    assert_eq!(match_within_tolerance(SPARSE, 26.0, |d| *d), Some(&25.0));
    assert_eq!(match_within_tolerance(SPARSE, 27.0, |d| *d), Some(&28.0));
    assert_eq!(match_within_tolerance(SPARSE, 26.5, |d| *d), None);
    assert_eq!(match_within_tolerance(SPARSE, 30.5, |d| *d), None);
}

#[test]
fn round_takes_first_entry_in_catalog_order_not_closest() {
    // 47.6(차이 0.8)이 48.3(차이 0.1)보다 앞에 있다.
    assert_eq!(round_key(48.4), Some(SizeKey::Diameter(47.6)));
    // 정확 일치는 순서와 관계없이 우선한다.
    assert_eq!(round_key(48.3), Some(SizeKey::Diameter(48.3)));
}

#[test]
fn round_large_diameters_use_large_tables() {
    match resolve_round(&SizeQuery::Numeric(104.5)) {
        Some(RoundMatch::Large(row)) => assert_eq!(row.od_mm, 104.0),
        other => panic!("expected large round match, got {other:?}"),
    }
    match resolve_round(&SizeQuery::Numeric(125.0)) {
        Some(RoundMatch::LargePipe(p)) => assert_eq!(p.od_mm, 125.0),
        other => panic!("expected large pipe match, got {other:?}"),
    }
    assert!(resolve_round(&SizeQuery::Numeric(120.0)).is_none());
    assert!(resolve_round(&SizeQuery::Numeric(100.5)).is_none());
}

#[test]
fn round_accepts_numeric_text() {
    assert_eq!(
        resolve_size(GeometryKind::Round, &SizeQuery::from(" 38.1 "), None),
        Some(SizeKey::Diameter(38.1))
    );
    assert_eq!(
        resolve_size(GeometryKind::Round, &SizeQuery::from("abc"), None),
        None
    );
}

#[test]
fn square_is_exact_match_only() {
    let key = |s: &str| resolve_size(GeometryKind::Square, &SizeQuery::from(s), None);
    assert_eq!(key("40x40"), Some(SizeKey::Composite("40x40".into())));
    assert_eq!(key("41x41"), None);
    assert_eq!(key("40X40"), Some(SizeKey::Composite("40x40".into())));
    assert_eq!(key(" 80 x 40 "), Some(SizeKey::Composite("80x40".into())));
    assert_eq!(key("40×40"), Some(SizeKey::Composite("40x40".into())));
    assert_eq!(key("40x80"), None);
}

#[test]
fn bare_number_becomes_symmetric_key() {
    assert_eq!(composite_key(&SizeQuery::Numeric(40.0)), Some("40x40".into()));
    assert_eq!(composite_key(&SizeQuery::Numeric(25.9)), Some("25x25".into()));
    assert_eq!(composite_key(&SizeQuery::from("50")), Some("50x50".into()));
    assert_eq!(composite_key(&SizeQuery::from("fifty")), None);
    assert_eq!(composite_key(&SizeQuery::Numeric(-5.0)), None);
}

#[test]
fn flat_width_truncates_then_matches_exactly() {
    let cold = Some(RollingState::Cold);
    assert_eq!(
        resolve_size(GeometryKind::Flat, &SizeQuery::Numeric(40.7), cold),
        Some(SizeKey::Width(40))
    );
    assert_eq!(
        resolve_size(GeometryKind::Flat, &SizeQuery::Numeric(41.0), cold),
        None
    );
    assert_eq!(
        resolve_size(GeometryKind::Flat, &SizeQuery::from("80"), Some(RollingState::Hot)),
        Some(SizeKey::Width(80))
    );
}

#[test]
fn angle_uses_rolling_table_with_hot_default() {
    assert_eq!(
        resolve_size(GeometryKind::Angle, &SizeQuery::Numeric(100.0), None),
        Some(SizeKey::Composite("100x100".into()))
    );
    assert_eq!(
        resolve_size(GeometryKind::Angle, &SizeQuery::from("52x52"), None),
        None
    );
}

#[test]
fn pipe_labels_match_exactly() {
    assert_eq!(resolve_pipe(&SizeQuery::from("1 1/2")).map(|r| r.bore), Some("1 1/2"));
    assert_eq!(resolve_pipe(&SizeQuery::from(" 2 ")).map(|r| r.bore), Some("2"));
    assert_eq!(resolve_pipe(&SizeQuery::Numeric(2.0)).map(|r| r.bore), Some("2"));
    assert!(resolve_pipe(&SizeQuery::Numeric(1.5)).is_none());
    assert!(resolve_pipe(&SizeQuery::from("11/2")).is_none());
}

#[test]
fn sheet_has_no_discrete_key() {
    assert_eq!(
        resolve_size(GeometryKind::Sheet, &SizeQuery::from("2500x1250"), None),
        None
    );
}

#[test]
fn size_lists_follow_catalog_rules() {
    let round = list_sizes(GeometryKind::Round);
    assert_eq!(round.len(), 43);
    assert_eq!(round.first(), Some(&SizeKey::Diameter(12.7)));
    assert_eq!(round.last(), Some(&SizeKey::Diameter(205.0)));
    let count_129 = round
        .iter()
        .filter(|k| **k == SizeKey::Diameter(129.0))
        .count();
    assert_eq!(count_129, 1);

    let flat = list_sizes(GeometryKind::Flat);
    assert_eq!(flat.len(), 13);
    assert_eq!(flat[0], SizeKey::Width(20));

    let square = list_sizes(GeometryKind::Square);
    assert_eq!(square[0].to_string(), "20x20");
    assert_eq!(square.last().map(|k| k.to_string()), Some("58x58".into()));

    let pipe = list_sizes(GeometryKind::SchedulePipe);
    assert_eq!(pipe.len(), 15);
    assert_eq!(pipe[0], SizeKey::Bore("1/4"));

    assert_eq!(list_sizes(GeometryKind::Angle).len(), 17);

    let plates: Vec<String> = list_sizes(GeometryKind::Sheet)
        .iter()
        .map(|k| k.to_string())
        .collect();
    assert_eq!(plates, vec!["6000x1500x3.0", "6000x1500x4.5", "6000x1500x8.0"]);
}

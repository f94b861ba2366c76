//! 평철(Flat bar) 단가표. 단위: 통화/m. 열은 편면/양면/전면 순서.

/// 400# 마감 시 기본 단가에 더하는 할증률.
pub const FINE_BRUSH_SURCHARGE: f64 = 0.30;

#[derive(Debug, Clone, Copy)]
pub struct FlatRow {
    pub width_mm: u32,
    pub one_side: f64,
    pub both_sides: f64,
    pub all_round: f64,
}

pub const FLAT_COLD: &[FlatRow] = &[
    row(20, 5.49, 11.13, 13.25),
    row(25, 6.00, 11.89, 14.37),
    row(30, 6.49, 12.88, 15.40),
    row(35, 6.86, 13.75, 16.00),
    row(40, 7.51, 14.65, 17.66),
    row(45, 7.87, 15.77, 18.89),
    row(50, 8.38, 16.91, 20.29),
    row(55, 9.00, 18.02, 21.68),
    row(60, 9.62, 19.02, 22.90),
    row(65, 10.12, 21.06, 25.19),
    row(70, 10.62, 21.30, 25.54),
    row(75, 11.25, 22.40, 26.82),
    row(80, 11.75, 23.54, 28.19),
];

pub const FLAT_HOT: &[FlatRow] = &[
    row(20, 11.13, 22.02, 26.43),
    row(25, 11.89, 23.90, 28.68),
    row(30, 12.88, 25.70, 30.82),
    row(35, 13.75, 27.55, 33.08),
    row(40, 14.65, 29.31, 35.18),
    row(45, 15.77, 31.58, 37.70),
    row(50, 16.91, 33.69, 40.48),
    row(55, 18.02, 35.95, 43.10),
    row(60, 19.01, 38.09, 43.10),
    row(65, 21.06, 40.34, 45.74),
    row(70, 21.30, 42.47, 47.86),
    row(75, 22.40, 44.60, 47.28),
    row(80, 23.54, 46.88, 56.26),
];

const fn row(width_mm: u32, one_side: f64, both_sides: f64, all_round: f64) -> FlatRow {
    FlatRow {
        width_mm,
        one_side,
        both_sides,
        all_round,
    }
}

//! 각관(Square tube) 브러싱 단가표 (NDE). 단위: 통화/m.

#[derive(Debug, Clone, Copy)]
pub struct SquareRow {
    /// "LENGTHxWIDTH" 형식의 정규화된 키
    pub size: &'static str,
    pub brushed_180: f64,
    pub brushed_400: f64,
    /// 180#+400# 복합 마감
    pub dual_180_400: f64,
}

pub const SQUARE_TUBE: &[SquareRow] = &[
    row("20x20", 10.42, 17.76, 13.12),
    row("25x25", 11.39, 19.28, 14.27),
    row("30x30", 12.25, 20.77, 15.40),
    row("40x40", 14.00, 23.64, 17.54),
    row("50x50", 16.14, 27.19, 20.14),
    row("60x60", 20.14, 33.94, 25.19),
    row("70x70", 24.81, 41.98, 31.06),
    row("80x40", 20.14, 33.94, 25.19),
    row("80x80", 29.31, 51.15, 36.59),
    // 58x58은 180#만 견적된다. 0은 미견적 셀이다.
    row("58x58", 71.48, 0.0, 0.0),
];

/// 각관 연마 단가 (2025).
pub const POLISH_SQUARE: &[(&str, f64)] = &[
    ("20x20", 7.33),
    ("25x25", 7.88),
    ("30x30", 8.42),
    ("40x40", 9.91),
    ("50x30", 9.66),
    ("50x50", 11.30),
];

const fn row(size: &'static str, brushed_180: f64, brushed_400: f64, dual_180_400: f64) -> SquareRow {
    SquareRow {
        size,
        brushed_180,
        brushed_400,
        dual_180_400,
    }
}

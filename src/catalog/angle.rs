//! 앵글(Angle iron) 단가표. 단위: 통화/m. 열은 양면, 내/외면 순서.

#[derive(Debug, Clone, Copy)]
pub struct AngleRow {
    pub size: &'static str,
    pub both_sides: f64,
    pub inside_outside: f64,
}

pub const ANGLE_HOT: &[AngleRow] = &[
    row("20x20", 42.99, 21.24),
    row("25x25", 45.90, 23.06),
    row("30x30", 49.74, 24.77),
    row("35x35", 53.14, 26.59),
    row("40x40", 56.54, 28.27),
    row("45x45", 60.88, 30.45),
    row("50x50", 65.31, 32.49),
    row("55x55", 69.57, 34.68),
    row("60x60", 73.42, 36.74),
    row("65x65", 81.27, 38.91),
    row("70x70", 82.22, 40.96),
    row("75x75", 86.46, 43.03),
    row("80x80", 90.92, 45.22),
    row("85x85", 96.61, 48.30),
    row("90x90", 102.27, 51.12),
    row("95x95", 107.96, 53.97),
    row("100x100", 113.65, 56.81),
];

pub const ANGLE_COLD: &[AngleRow] = &[
    row("20x20", 27.58, 13.97),
    row("25x25", 30.19, 14.90),
    row("30x30", 32.64, 16.14),
    row("35x35", 34.52, 17.25),
    row("40x40", 37.73, 18.37),
    row("45x45", 39.54, 19.77),
    row("50x50", 42.07, 21.23),
    row("55x55", 45.17, 22.61),
    row("60x60", 48.29, 23.84),
    row("65x65", 50.82, 26.41),
    row("70x70", 53.35, 26.69),
    row("75x75", 56.48, 28.10),
    row("80x80", 59.09, 29.54),
    row("85x85", 62.77, 31.38),
    row("90x90", 66.48, 33.23),
    row("95x95", 70.18, 35.06),
    row("100x100", 73.86, 36.92),
];

const fn row(size: &'static str, both_sides: f64, inside_outside: f64) -> AngleRow {
    AngleRow {
        size,
        both_sides,
        inside_outside,
    }
}

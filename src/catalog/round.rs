//! 원형관(Round tube) 표면처리 단가표. 단위: 통화/m.

/// 이 외경 이상이면 대구경 테이블을 사용한다.
pub const LARGE_DIAMETER_MM: f64 = 101.0;

/// 외경 한 행에 대한 마감별 단가.
#[derive(Debug, Clone, Copy)]
pub struct RoundRow {
    pub od_mm: f64,
    pub brushed_180: f64,
    pub brushed_400: f64,
    pub mirror: f64,
}

/// 외경 하나에 단가 하나만 있는 테이블(연마, 대구경 파이프)용 행.
#[derive(Debug, Clone, Copy)]
pub struct DiameterPrice {
    pub od_mm: f64,
    pub price: f64,
}

/// 표준 원형관 180#/400#/미러 브러싱 (NDE 2024).
pub const ROUND_TUBE: &[RoundRow] = &[
    row(12.7, 4.30, 5.48, 8.25),
    row(15.9, 4.31, 5.48, 8.25),
    row(19.1, 4.23, 5.63, 8.51),
    row(20.0, 4.23, 5.63, 8.51),
    row(22.2, 4.63, 6.11, 8.75),
    row(25.0, 5.11, 6.74, 10.25),
    row(28.0, 6.11, 7.38, 11.02),
    row(31.7, 6.11, 7.38, 11.02),
    row(32.0, 6.50, 8.11, 12.25),
    row(34.9, 6.50, 8.11, 12.25),
    row(35.0, 7.01, 7.89, 13.03),
    row(38.1, 7.01, 8.14, 14.00),
    row(40.0, 7.34, 9.73, 14.34),
    row(41.2, 7.50, 10.00, 15.00),
    row(42.7, 7.74, 10.37, 15.51),
    row(44.5, 7.74, 10.37, 15.51),
    row(45.0, 8.11, 10.85, 16.25),
    row(47.6, 8.11, 11.50, 17.25),
    row(48.3, 8.11, 11.50, 17.25),
    row(48.6, 8.60, 11.50, 17.25),
    row(50.8, 8.99, 12.00, 18.02),
    row(52.0, 9.13, 12.25, 18.27),
    row(53.0, 9.57, 12.38, 18.51),
    row(54.0, 9.50, 12.74, 19.00),
    row(55.0, 9.62, 12.88, 19.28),
    row(57.0, 10.00, 13.40, 20.00),
    row(58.0, 10.12, 13.50, 20.29),
    row(60.0, 10.25, 13.62, 20.52),
    row(60.3, 10.50, 14.00, 21.06),
    row(63.5, 11.02, 14.65, 22.02),
    row(65.0, 11.25, 15.00, 22.55),
    row(70.0, 12.00, 16.00, 24.02),
    row(76.2, 12.88, 17.18, 25.82),
    row(80.0, 13.25, 17.64, 26.55),
    row(89.9, 13.75, 18.42, 27.55),
];

/// 대구경(101mm 이상) 원형관 180#/400#/미러.
pub const LARGE_ROUND_TUBE: &[RoundRow] = &[
    row(101.0, 20.15, 26.84, 40.34),
    row(104.0, 21.06, 28.08, 42.07),
    row(114.0, 22.55, 30.06, 45.10),
    row(127.0, 24.02, 32.04, 48.11),
    row(129.0, 24.57, 32.92, 49.10),
    row(154.0, 27.40, 36.60, 54.86),
];

/// 대구경 파이프 고정 단가. 마감과 관계없이 한 가지 단가만 있다.
pub const LARGE_PIPE: &[DiameterPrice] = &[dp(125.0, 87.38), dp(129.0, 88.16), dp(205.0, 380.50)];

/// 원형관 연마(Polishing) 단가 (2025). 행 순서는 가격표 순서를 그대로 따른다.
pub const POLISH_ROUND: &[DiameterPrice] = &[
    dp(12.7, 3.05),
    dp(15.9, 3.05),
    dp(19.1, 3.14),
    dp(20.0, 3.14),
    dp(22.2, 3.42),
    dp(25.0, 3.77),
    dp(28.0, 4.04),
    dp(37.1, 4.51),
    dp(34.9, 4.84),
    dp(35.0, 4.84),
    dp(38.1, 5.14),
    dp(40.0, 5.42),
    dp(41.2, 5.50),
    dp(42.7, 5.70),
    dp(44.5, 5.70),
    dp(45.0, 5.98),
    dp(47.6, 6.36),
    dp(48.3, 6.36),
    dp(48.6, 6.36),
    dp(50.8, 6.62),
    dp(52.0, 6.72),
    dp(53.0, 6.81),
    dp(54.0, 6.99),
    dp(55.0, 7.08),
    dp(57.0, 7.36),
    dp(58.0, 7.45),
    dp(60.0, 7.56),
    dp(60.3, 7.72),
    dp(63.5, 8.11),
    dp(65.0, 8.29),
    dp(70.0, 8.83),
    dp(76.2, 9.80),
];

const fn row(od_mm: f64, brushed_180: f64, brushed_400: f64, mirror: f64) -> RoundRow {
    RoundRow {
        od_mm,
        brushed_180,
        brushed_400,
        mirror,
    }
}

const fn dp(od_mm: f64, price: f64) -> DiameterPrice {
    DiameterPrice { od_mm, price }
}

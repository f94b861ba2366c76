//! 스케줄 파이프 180# 단가표. 단위: 통화/m.

#[derive(Debug, Clone, Copy)]
pub struct PipeRow {
    /// 호칭경 라벨 (inch, 예: "1 1/2")
    pub bore: &'static str,
    pub sch10: f64,
    pub sch40: f64,
}

pub const SCHEDULE_PIPE: &[PipeRow] = &[
    row("1/4", 6.00, 6.62),
    row("3/8", 9.00, 10.00),
    row("1/2", 11.88, 13.03),
    row("3/4", 14.00, 15.13),
    row("1", 15.77, 17.39),
    row("1 1/4", 19.76, 21.53),
    row("1 1/2", 22.94, 25.70),
    row("2", 26.92, 29.42),
    row("2 1/2", 31.06, 34.07),
    row("3", 35.18, 38.85),
    row("3 1/2", 55.13, 60.67),
    row("4", 69.91, 77.70),
    row("5", 84.46, 153.93),
    row("6", 222.95, 315.90),
    // 8" SCH40은 미견적
    row("8", 406.07, 0.0),
];

const fn row(bore: &'static str, sch10: f64, sch40: f64) -> PipeRow {
    PipeRow { bore, sch10, sch40 }
}

/// 표시용 반올림. 중간 계산에는 쓰지 않는다.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

pub fn round2(value: f64) -> f64 {
    round_to(value, 2)
}

pub fn round3(value: f64) -> f64 {
    round_to(value, 3)
}

use serde::{Deserialize, Serialize};

/// 길이 단위. 치수 입력 기준은 mm이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthUnit {
    Millimeter,
    Meter,
    Inch,
    Foot,
}

impl LengthUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            LengthUnit::Millimeter => "mm",
            LengthUnit::Meter => "m",
            LengthUnit::Inch => "in",
            LengthUnit::Foot => "ft",
        }
    }
}

fn to_mm(value: f64, unit: LengthUnit) -> f64 {
    match unit {
        LengthUnit::Millimeter => value,
        LengthUnit::Meter => value * 1000.0,
        LengthUnit::Inch => value * 25.4,
        LengthUnit::Foot => value * 304.8,
    }
}

fn from_mm(value_mm: f64, unit: LengthUnit) -> f64 {
    match unit {
        LengthUnit::Millimeter => value_mm,
        LengthUnit::Meter => value_mm / 1000.0,
        LengthUnit::Inch => value_mm / 25.4,
        LengthUnit::Foot => value_mm / 304.8,
    }
}

/// 길이를 다른 단위로 변환한다.
pub fn convert_length(value: f64, from: LengthUnit, to: LengthUnit) -> f64 {
    from_mm(to_mm(value, from), to)
}

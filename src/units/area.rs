use serde::{Deserialize, Serialize};

/// 면적 단위. 단가 기준은 m²이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AreaUnit {
    SquareMeter,
    SquareFoot,
}

impl AreaUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            AreaUnit::SquareMeter => "m²",
            AreaUnit::SquareFoot => "ft²",
        }
    }
}

fn to_square_meter(value: f64, unit: AreaUnit) -> f64 {
    match unit {
        AreaUnit::SquareMeter => value,
        AreaUnit::SquareFoot => value * 0.092903,
    }
}

fn from_square_meter(value: f64, unit: AreaUnit) -> f64 {
    match unit {
        AreaUnit::SquareMeter => value,
        AreaUnit::SquareFoot => value / 0.092903,
    }
}

/// 면적을 변환한다.
pub fn convert_area(value: f64, from: AreaUnit, to: AreaUnit) -> f64 {
    from_square_meter(to_square_meter(value, from), to)
}

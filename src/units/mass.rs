use serde::{Deserialize, Serialize};

/// 질량 단위. 내부 기준은 kg이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MassUnit {
    Kilogram,
    Tonne,
    Pound,
}

impl MassUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            MassUnit::Kilogram => "kg",
            MassUnit::Tonne => "t",
            MassUnit::Pound => "lb",
        }
    }
}

fn to_kg(value: f64, unit: MassUnit) -> f64 {
    match unit {
        MassUnit::Kilogram => value,
        MassUnit::Tonne => value * 1000.0,
        MassUnit::Pound => value * 0.453592,
    }
}

fn from_kg(value: f64, unit: MassUnit) -> f64 {
    match unit {
        MassUnit::Kilogram => value,
        MassUnit::Tonne => value / 1000.0,
        MassUnit::Pound => value / 0.453592,
    }
}

/// 질량을 변환한다.
pub fn convert_mass(value: f64, from: MassUnit, to: MassUnit) -> f64 {
    from_kg(to_kg(value, from), to)
}

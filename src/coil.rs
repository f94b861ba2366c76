//! 코일 질량 ↔ 외경 ↔ 전개 길이 환산.
//!
//! 감긴 코일 단면(환형) 면적 = 펼친 스트립 길이 × 두께 관계를 사용한다.
//! π(OD² − ID²)/4 = L·t

use std::f64::consts::PI;

use serde::Serialize;
use thiserror::Error;

use crate::material_db;
use crate::pricing::rounding::{round2, round3, round_to};

/// 내경을 따로 주지 않을 때의 표준 코일 내경 [mm]
pub const DEFAULT_INNER_DIAMETER_MM: f64 = 508.0;

/// 코일 계산 오류.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoilError {
    #[error("입력 오류: {0}")]
    InvalidInput(&'static str),
}

/// 풀어야 할 미지수의 반대편, 즉 호출자가 알고 있는 값.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CoilKnown {
    MassKg(f64),
    OuterDiameterMm(f64),
}

/// 코일 계산 입력.
#[derive(Debug, Clone, PartialEq)]
pub struct CoilSpecification {
    pub known: CoilKnown,
    pub inner_diameter_mm: f64,
    pub width_mm: f64,
    pub thickness_mm: f64,
    /// 재질 등급 코드 (예: "304")
    pub grade: String,
}

impl CoilSpecification {
    /// 질량/외경 중 정확히 하나만 주어져야 한다.
    pub fn from_options(
        mass_kg: Option<f64>,
        outer_diameter_mm: Option<f64>,
        inner_diameter_mm: f64,
        width_mm: f64,
        thickness_mm: f64,
        grade: &str,
    ) -> Result<Self, CoilError> {
        let known = match (mass_kg, outer_diameter_mm) {
            (Some(m), None) => CoilKnown::MassKg(m),
            (None, Some(od)) => CoilKnown::OuterDiameterMm(od),
            (None, None) => {
                return Err(CoilError::InvalidInput("질량 또는 외경 중 하나가 필요합니다."))
            }
            (Some(_), Some(_)) => {
                return Err(CoilError::InvalidInput(
                    "질량과 외경은 동시에 지정할 수 없습니다.",
                ))
            }
        };
        Ok(Self {
            known,
            inner_diameter_mm,
            width_mm,
            thickness_mm,
            grade: grade.to_string(),
        })
    }
}

/// 코일 계산 결과. 값은 반올림하지 않은 원값이며, 표시용은 [`CoilResult::rounded`]를 쓴다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoilResult {
    pub mass_kg: f64,
    pub length_m: f64,
    pub area_m2: f64,
    pub outer_diameter_mm: f64,
    pub inner_diameter_mm: f64,
    pub width_mm: f64,
    pub thickness_mm: f64,
    pub grade: String,
    /// kg/dm³
    pub density: f64,
    /// 등급을 찾지 못해 기본 비중을 썼는지 여부
    pub density_fallback: bool,
    pub kg_per_sqm: f64,
    pub sqm_per_ton: f64,
    pub sqm_per_kg: f64,
}

impl CoilResult {
    /// 질량/길이/면적 2자리, 직경 1자리, 비중 관련 비율 2~4자리로 반올림한 사본.
    pub fn rounded(&self) -> CoilResult {
        CoilResult {
            mass_kg: round2(self.mass_kg),
            length_m: round2(self.length_m),
            area_m2: round2(self.area_m2),
            outer_diameter_mm: round_to(self.outer_diameter_mm, 1),
            inner_diameter_mm: round_to(self.inner_diameter_mm, 1),
            width_mm: self.width_mm,
            thickness_mm: self.thickness_mm,
            grade: self.grade.clone(),
            density: self.density,
            density_fallback: self.density_fallback,
            kg_per_sqm: round3(self.kg_per_sqm),
            sqm_per_ton: round2(self.sqm_per_ton),
            sqm_per_kg: round_to(self.sqm_per_kg, 4),
        }
    }
}

fn require_positive(value: f64, msg: &'static str) -> Result<f64, CoilError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(CoilError::InvalidInput(msg))
    }
}

/// 코일의 미지수(질량 또는 외경)를 푼다.
pub fn solve(spec: &CoilSpecification) -> Result<CoilResult, CoilError> {
    let width_mm = require_positive(spec.width_mm, "폭은 0보다 커야 합니다.")?;
    let thickness_mm = require_positive(spec.thickness_mm, "두께는 0보다 커야 합니다.")?;
    if !spec.inner_diameter_mm.is_finite() || spec.inner_diameter_mm < 0.0 {
        return Err(CoilError::InvalidInput("내경은 0 이상이어야 합니다."));
    }
    let density = material_db::density_for(&spec.grade);
    let density_kg_per_dm3 = require_positive(density.kg_per_dm3, "비중은 0보다 커야 합니다.")?;

    let width_m = width_mm / 1000.0;
    let thickness_m = thickness_mm / 1000.0;
    let id_m = spec.inner_diameter_mm / 1000.0;
    // kg/m² (두께 1m당 밀도 × 두께)
    let kg_per_sqm = thickness_m * density_kg_per_dm3 * 1000.0;

    let (mass_kg, length_m, od_mm) = match spec.known {
        CoilKnown::MassKg(mass) => {
            let mass = require_positive(mass, "질량은 0보다 커야 합니다.")?;
            let length_m = mass / (width_m * kg_per_sqm);
            let od_squared = id_m * id_m + 4.0 * length_m * thickness_m / PI;
            (mass, length_m, od_squared.sqrt() * 1000.0)
        }
        CoilKnown::OuterDiameterMm(od) => {
            let od = require_positive(od, "외경은 0보다 커야 합니다.")?;
            if od <= spec.inner_diameter_mm {
                return Err(CoilError::InvalidInput("외경은 내경보다 커야 합니다."));
            }
            let od_m = od / 1000.0;
            let length_m = PI * (od_m * od_m - id_m * id_m) / (4.0 * thickness_m);
            (length_m * width_m * kg_per_sqm, length_m, od)
        }
    };
    tracing::debug!(grade = %spec.grade, mass_kg, length_m, od_mm, "coil solved");

    Ok(CoilResult {
        mass_kg,
        length_m,
        area_m2: length_m * width_m,
        outer_diameter_mm: od_mm,
        inner_diameter_mm: spec.inner_diameter_mm,
        width_mm,
        thickness_mm,
        grade: spec.grade.clone(),
        density: density_kg_per_dm3,
        density_fallback: density.fallback,
        kg_per_sqm,
        sqm_per_ton: 1000.0 / kg_per_sqm,
        sqm_per_kg: 1.0 / kg_per_sqm,
    })
}

/// 옵션 형태 입력으로 코일을 푼다. 질량/외경 중 정확히 하나가 필요하다.
pub fn solve_coil(
    mass_kg: Option<f64>,
    outer_diameter_mm: Option<f64>,
    inner_diameter_mm: f64,
    width_mm: f64,
    thickness_mm: f64,
    grade: &str,
) -> Result<CoilResult, CoilError> {
    let spec = CoilSpecification::from_options(
        mass_kg,
        outer_diameter_mm,
        inner_diameter_mm,
        width_mm,
        thickness_mm,
        grade,
    )?;
    solve(&spec)
}

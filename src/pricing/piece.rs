//! 판재 절단품/원판 견적.
//!
//! 표준 원판(2500x1250) 면적의 95% 이상은 원판으로 보고 할증이 없다.
//! 그 미만은 1m² 이상이면 +40%, 1m² 미만이면 +60%를 붙인다.
//! 최종 금액은 절단품 최소 청구액 아래로 내려가지 않는다.

use serde::Serialize;

use super::finish::area_rate_key;
use super::rounding::{round2, round3};
use super::PricingError;
use crate::catalog::sheet::{self, MIN_CHARGE_PIECE, STANDARD_SHEET_MM};
use crate::catalog::RollingState;

/// 절단 구분.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PieceTier {
    FullSheet,
    LargePiece,
    SmallPiece,
}

impl PieceTier {
    pub fn classify(area_m2: f64) -> Self {
        if area_m2 >= standard_sheet_area_m2() * sheet::FULL_SHEET_RATIO {
            PieceTier::FullSheet
        } else if area_m2 >= sheet::LARGE_PIECE_MIN_AREA_M2 {
            PieceTier::LargePiece
        } else {
            PieceTier::SmallPiece
        }
    }

    pub fn markup(&self) -> f64 {
        match self {
            PieceTier::FullSheet => 0.0,
            PieceTier::LargePiece => sheet::LARGE_PIECE_MARKUP,
            PieceTier::SmallPiece => sheet::SMALL_PIECE_MARKUP,
        }
    }
}

/// 판재 견적 결과. 금액은 소수 2자리, 면적은 3자리로 반올림된 표시값이다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricingResult {
    /// "LENGTHxWIDTH" [mm]
    pub size_key: String,
    pub area_m2: f64,
    pub thickness_mm: f64,
    pub finish: String,
    pub rolling: RollingState,
    pub tier: PieceTier,
    pub base_price_sqm: f64,
    pub markup: f64,
    pub final_price_sqm: f64,
    pub subtotal: f64,
    pub total: f64,
    /// 최소 청구액이 적용되었는지 여부
    pub min_applied: bool,
}

pub fn standard_sheet_area_m2() -> f64 {
    (STANDARD_SHEET_MM.0 / 1000.0) * (STANDARD_SHEET_MM.1 / 1000.0)
}

/// 두께와 마감으로 m²당 기본 단가를 정한다.
///
/// 3mm 초과는 두께가 정확히 일치하는 열연 행에서, 마감이 없으면 그 행의 N4 ONLY 단가를 쓴다.
/// 3mm 이하는 냉연 표에서 마감으로만 찾는다. 행/마감이 없으면 구간 기본 단가를 쓴다.
pub fn sheet_base_rate(thickness_mm: f64, finish: &str) -> (RollingState, f64) {
    let key = area_rate_key(finish);
    let rolling = RollingState::for_thickness(thickness_mm);
    let rate = match rolling {
        RollingState::Hot => match sheet::hot_row(thickness_mm) {
            Some(row) if key == "N4 + PVC" => row.n4_pvc,
            Some(row) => row.n4_only,
            None => sheet::DEFAULT_HOT_RATE,
        },
        RollingState::Cold => {
            sheet::rate_for(sheet::SHEET_COLD, &key).unwrap_or(sheet::DEFAULT_COLD_RATE)
        }
    };
    (rolling, rate)
}

/// 판재 조각의 견적을 계산한다.
pub fn price_sheet_piece(
    length_mm: f64,
    width_mm: f64,
    thickness_mm: f64,
    finish: &str,
) -> Result<PricingResult, PricingError> {
    if !length_mm.is_finite() || length_mm <= 0.0 {
        return Err(PricingError::InvalidInput("길이는 0보다 커야 합니다."));
    }
    if !width_mm.is_finite() || width_mm <= 0.0 {
        return Err(PricingError::InvalidInput("폭은 0보다 커야 합니다."));
    }
    if !thickness_mm.is_finite() || thickness_mm <= 0.0 {
        return Err(PricingError::InvalidInput("두께는 0보다 커야 합니다."));
    }

    let area_m2 = (length_mm / 1000.0) * (width_mm / 1000.0);
    let tier = PieceTier::classify(area_m2);
    let markup = tier.markup();
    let (rolling, base_rate) = sheet_base_rate(thickness_mm, finish);

    let final_rate = base_rate * (1.0 + markup);
    let subtotal = area_m2 * final_rate;
    let total = subtotal.max(MIN_CHARGE_PIECE);
    let min_applied = subtotal < MIN_CHARGE_PIECE;
    tracing::debug!(area_m2, ?tier, base_rate, subtotal, min_applied, "sheet piece priced");

    Ok(PricingResult {
        size_key: format!("{length_mm}x{width_mm}"),
        area_m2: round3(area_m2),
        thickness_mm,
        finish: finish.to_string(),
        rolling,
        tier,
        base_price_sqm: round2(base_rate),
        markup,
        final_price_sqm: round2(final_rate),
        subtotal: round2(subtotal),
        total: round2(total),
        min_applied,
    })
}

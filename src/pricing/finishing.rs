//! 면적 기준 표면처리(finishing) 견적.

use serde::Serialize;

use super::finish::area_rate_key;
use super::rounding::round2;
use super::PricingError;
use crate::catalog::sheet::{self, MIN_CHARGE_JOB, MIN_CHARGE_PIECE};
use crate::catalog::RollingState;
use crate::coil::CoilResult;

/// 작업 종류. 단가표와 최소 청구액이 달라진다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FinishJob {
    /// 판재 조각: 두께별 냉/열연 표, 절단품 최소 청구액
    Sheet,
    /// 코일: 두께별 냉/열연 표, 작업 최소 청구액
    Coil,
    /// 소형 코일: 소형 코일 표, 작업 최소 청구액
    SmallCoil,
}

impl FinishJob {
    pub fn minimum_charge(&self) -> f64 {
        match self {
            FinishJob::Sheet => MIN_CHARGE_PIECE,
            FinishJob::Coil | FinishJob::SmallCoil => MIN_CHARGE_JOB,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinishingQuote {
    pub area_m2: f64,
    pub finish: String,
    pub job: FinishJob,
    pub rolling: RollingState,
    pub price_sqm: f64,
    pub subtotal: f64,
    pub minimum_charge: f64,
    pub total: f64,
    pub min_applied: bool,
}

fn finishing_rate(finish: &str, thickness_mm: f64, job: FinishJob) -> (RollingState, f64) {
    let key = area_rate_key(finish);
    if job == FinishJob::SmallCoil {
        let rate = sheet::rate_for(sheet::SMALL_COIL_FINISH, &key)
            .unwrap_or(sheet::DEFAULT_SMALL_COIL_RATE);
        return (RollingState::Cold, rate);
    }
    let rolling = RollingState::for_thickness(thickness_mm);
    let rate = match rolling {
        RollingState::Hot => {
            sheet::rate_for(sheet::FINISH_HOT, &key).unwrap_or(sheet::DEFAULT_HOT_RATE)
        }
        RollingState::Cold => {
            sheet::rate_for(sheet::FINISH_COLD, &key).unwrap_or(sheet::DEFAULT_COLD_RATE)
        }
    };
    (rolling, rate)
}

/// 면적과 마감으로 표면처리 금액을 계산한다. 최소 청구액 아래로는 내려가지 않는다.
pub fn price_finishing(
    area_m2: f64,
    finish: &str,
    thickness_mm: f64,
    job: FinishJob,
) -> Result<FinishingQuote, PricingError> {
    if !area_m2.is_finite() || area_m2 < 0.0 {
        return Err(PricingError::InvalidInput("면적은 0 이상이어야 합니다."));
    }
    if !thickness_mm.is_finite() || thickness_mm < 0.0 {
        return Err(PricingError::InvalidInput("두께는 0 이상이어야 합니다."));
    }
    let (rolling, rate) = finishing_rate(finish, thickness_mm, job);
    let subtotal = area_m2 * rate;
    let minimum_charge = job.minimum_charge();
    Ok(FinishingQuote {
        area_m2: round2(area_m2),
        finish: finish.to_string(),
        job,
        rolling,
        price_sqm: round2(rate),
        subtotal: round2(subtotal),
        minimum_charge,
        total: round2(subtotal.max(minimum_charge)),
        min_applied: subtotal < minimum_charge,
    })
}

/// 코일 계산 결과의 (반올림 전) 면적으로 코일 표면처리 견적을 낸다.
pub fn quote_coil_finishing(coil: &CoilResult, finish: &str) -> Result<FinishingQuote, PricingError> {
    price_finishing(coil.area_m2, finish, coil.thickness_mm, FinishJob::Coil)
}

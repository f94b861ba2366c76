//! 제품군별 정적 단가표 모음.
//! 모든 테이블은 `&'static` 상수이며 프로세스 수명 동안 변경되지 않는다.

pub mod angle;
pub mod flat;
pub mod pipe;
pub mod round;
pub mod sheet;
pub mod square;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::size_resolver::SizeKey;

/// 제품 형상(단가표 종류).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeometryKind {
    Round,
    Square,
    Flat,
    Angle,
    #[serde(rename = "pipe")]
    SchedulePipe,
    Sheet,
}

impl GeometryKind {
    pub const ALL: [GeometryKind; 6] = [
        GeometryKind::Round,
        GeometryKind::Square,
        GeometryKind::Flat,
        GeometryKind::Angle,
        GeometryKind::SchedulePipe,
        GeometryKind::Sheet,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GeometryKind::Round => "round",
            GeometryKind::Square => "square",
            GeometryKind::Flat => "flat",
            GeometryKind::Angle => "angle",
            GeometryKind::SchedulePipe => "pipe",
            GeometryKind::Sheet => "sheet",
        }
    }
}

impl fmt::Display for GeometryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 문자열을 형상/압연 상태로 해석하지 못했을 때의 오류.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCatalogError {
    #[error("알 수 없는 형상: {0}")]
    UnknownGeometry(String),
    #[error("알 수 없는 압연 상태: {0}")]
    UnknownRolling(String),
}

impl FromStr for GeometryKind {
    type Err = ParseCatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "round" | "round-tube" | "tube" => Ok(GeometryKind::Round),
            "square" | "square-tube" => Ok(GeometryKind::Square),
            "flat" | "flat-bar" => Ok(GeometryKind::Flat),
            "angle" | "angle-iron" => Ok(GeometryKind::Angle),
            "pipe" | "schedule-pipe" | "schedule_pipe" => Ok(GeometryKind::SchedulePipe),
            "sheet" | "plate" => Ok(GeometryKind::Sheet),
            other => Err(ParseCatalogError::UnknownGeometry(other.to_string())),
        }
    }
}

/// 압연 상태. 냉연(박판) / 열연(후판).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RollingState {
    Cold,
    Hot,
}

impl RollingState {
    /// 판재/코일 두께로 압연 구분을 정한다. 3mm 이하는 냉연.
    pub fn for_thickness(thickness_mm: f64) -> Self {
        if thickness_mm > sheet::COLD_ROLLED_MAX_THICKNESS_MM {
            RollingState::Hot
        } else {
            RollingState::Cold
        }
    }

    /// 압연 상태가 지정되지 않았을 때 형상별 기본값. 평철은 냉연, 앵글은 열연.
    pub fn default_for(kind: GeometryKind) -> Option<Self> {
        match kind {
            GeometryKind::Flat => Some(RollingState::Cold),
            GeometryKind::Angle => Some(RollingState::Hot),
            _ => None,
        }
    }
}

impl fmt::Display for RollingState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RollingState::Cold => f.write_str("cold"),
            RollingState::Hot => f.write_str("hot"),
        }
    }
}

impl FromStr for RollingState {
    type Err = ParseCatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cold" | "cr" | "cold-rolled" => Ok(RollingState::Cold),
            "hot" | "hr" | "hot-rolled" => Ok(RollingState::Hot),
            other => Err(ParseCatalogError::UnknownRolling(other.to_string())),
        }
    }
}

/// 선택 UI 등에서 쓸 형상별 사이즈 목록을 반환한다.
///
/// - 원형관: 표준/대구경/대구경 파이프 외경의 합집합(오름차순, 중복 제거)
/// - 평철: 냉연 폭 오름차순
/// - 각관/앵글/파이프: 단가표 순서
/// - 판재: 대형 후판 키
pub fn list_sizes(kind: GeometryKind) -> Vec<SizeKey> {
    match kind {
        GeometryKind::Round => {
            let mut diameters: Vec<f64> = round::ROUND_TUBE
                .iter()
                .chain(round::LARGE_ROUND_TUBE)
                .map(|r| r.od_mm)
                .chain(round::LARGE_PIPE.iter().map(|p| p.od_mm))
                .collect();
            diameters.sort_by(|a, b| a.total_cmp(b));
            diameters.dedup();
            diameters.into_iter().map(SizeKey::Diameter).collect()
        }
        GeometryKind::Square => square::SQUARE_TUBE
            .iter()
            .map(|r| SizeKey::Composite(r.size.to_string()))
            .collect(),
        GeometryKind::Flat => {
            let mut widths: Vec<u32> = flat::FLAT_COLD.iter().map(|r| r.width_mm).collect();
            widths.sort_unstable();
            widths.into_iter().map(SizeKey::Width).collect()
        }
        GeometryKind::Angle => angle::ANGLE_HOT
            .iter()
            .map(|r| SizeKey::Composite(r.size.to_string()))
            .collect(),
        GeometryKind::SchedulePipe => pipe::SCHEDULE_PIPE
            .iter()
            .map(|r| SizeKey::Bore(r.bore))
            .collect(),
        GeometryKind::Sheet => sheet::LARGE_PLATES
            .iter()
            .map(|p| SizeKey::Composite(p.key()))
            .collect(),
    }
}

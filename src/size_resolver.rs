//! 요청 사이즈를 단가표 키로 정규화한다.
//!
//! 원형관은 1mm 허용오차 매칭, 각관/평철/앵글은 정확 일치만 허용한다.
//! 두 규칙은 견적 결과가 달라지므로 하나로 합치지 않는다.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::catalog::angle::{self, AngleRow};
use crate::catalog::flat::{self, FlatRow};
use crate::catalog::pipe::{self, PipeRow};
use crate::catalog::round::{self, DiameterPrice, RoundRow};
use crate::catalog::square::{self, SquareRow};
use crate::catalog::{GeometryKind, RollingState};

/// 원형관 외경 허용오차 [mm] (경계 포함)
pub const DIAMETER_TOLERANCE_MM: f64 = 1.0;

/// 호출자가 넘긴 원시 사이즈.
#[derive(Debug, Clone, PartialEq)]
pub enum SizeQuery {
    Numeric(f64),
    Text(String),
}

impl From<f64> for SizeQuery {
    fn from(value: f64) -> Self {
        SizeQuery::Numeric(value)
    }
}

impl From<&str> for SizeQuery {
    fn from(value: &str) -> Self {
        SizeQuery::Text(value.to_string())
    }
}

impl From<String> for SizeQuery {
    fn from(value: String) -> Self {
        SizeQuery::Text(value)
    }
}

impl FromStr for SizeQuery {
    type Err = std::convert::Infallible;

    /// 숫자로 읽히면 `Numeric`, 아니면 `Text`로 둔다.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().parse::<f64>() {
            Ok(v) => SizeQuery::Numeric(v),
            Err(_) => SizeQuery::Text(s.to_string()),
        })
    }
}

impl SizeQuery {
    fn as_number(&self) -> Option<f64> {
        let v = match self {
            SizeQuery::Numeric(v) => *v,
            SizeQuery::Text(s) => s.trim().parse::<f64>().ok()?,
        };
        v.is_finite().then_some(v)
    }
}

/// 단가표에서 확정된 사이즈 키.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SizeKey {
    /// 원형관 외경 [mm]
    Diameter(f64),
    /// "LENGTHxWIDTH" 복합 키
    Composite(String),
    /// 평철 호칭 폭 [mm]
    Width(u32),
    /// 파이프 호칭경 라벨
    Bore(&'static str),
}

impl fmt::Display for SizeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SizeKey::Diameter(d) => write!(f, "{d}"),
            SizeKey::Composite(k) => f.write_str(k),
            SizeKey::Width(w) => write!(f, "{w}"),
            SizeKey::Bore(b) => f.write_str(b),
        }
    }
}

/// 원형관 매칭 결과. 어느 테이블에서 찾았는지 함께 보관한다.
#[derive(Debug, Clone, Copy)]
pub enum RoundMatch {
    Standard(&'static RoundRow),
    Large(&'static RoundRow),
    LargePipe(&'static DiameterPrice),
}

impl RoundMatch {
    pub fn od_mm(&self) -> f64 {
        match self {
            RoundMatch::Standard(r) | RoundMatch::Large(r) => r.od_mm,
            RoundMatch::LargePipe(p) => p.od_mm,
        }
    }
}

/// 정확 일치를 우선하고, 없으면 허용오차 이내의 첫 행(테이블 순서)을 고른다.
/// 가장 가까운 행이 아닐 수 있다.
pub fn match_within_tolerance<T>(
    rows: &'static [T],
    requested_mm: f64,
    od: impl Fn(&T) -> f64,
) -> Option<&'static T> {
    if let Some(exact) = rows.iter().find(|r| od(*r) == requested_mm) {
        return Some(exact);
    }
    let hit = rows
        .iter()
        .find(|r| (od(*r) - requested_mm).abs() <= DIAMETER_TOLERANCE_MM);
    if let Some(r) = hit {
        tracing::debug!(requested_mm, matched_mm = od(r), "tolerance match");
    }
    hit
}

/// 원형관 외경을 해석한다. 101mm 이상은 대구경 → 대구경 파이프 순으로 찾는다.
pub fn resolve_round(size: &SizeQuery) -> Option<RoundMatch> {
    let requested = size.as_number()?;
    if requested >= round::LARGE_DIAMETER_MM {
        match_within_tolerance(round::LARGE_ROUND_TUBE, requested, |r| r.od_mm)
            .map(RoundMatch::Large)
            .or_else(|| {
                match_within_tolerance(round::LARGE_PIPE, requested, |p| p.od_mm)
                    .map(RoundMatch::LargePipe)
            })
    } else {
        match_within_tolerance(round::ROUND_TUBE, requested, |r| r.od_mm).map(RoundMatch::Standard)
    }
}

/// 연마 단가표에서 외경을 찾는다. 연마표는 자체 순서로 따로 매칭한다.
pub fn resolve_round_polish(size: &SizeQuery) -> Option<&'static DiameterPrice> {
    let requested = size.as_number()?;
    match_within_tolerance(round::POLISH_ROUND, requested, |p| p.od_mm)
}

/// 각관/앵글용 "LENGTHxWIDTH" 키로 정규화한다.
///
/// 숫자 하나만 오면 정수로 자른 뒤 "NxN"으로 바꾼다. 구분자는 x/X/× 모두 허용하고 공백은 무시한다.
pub fn composite_key(size: &SizeQuery) -> Option<String> {
    match size {
        SizeQuery::Numeric(v) => symmetric_key(*v),
        SizeQuery::Text(s) => {
            let lower = s.to_lowercase().replace('×', "x");
            if lower.contains('x') {
                Some(lower.chars().filter(|c| !c.is_whitespace()).collect())
            } else {
                lower.trim().parse::<f64>().ok().and_then(symmetric_key)
            }
        }
    }
}

fn symmetric_key(v: f64) -> Option<String> {
    if !v.is_finite() || v < 0.0 {
        return None;
    }
    let n = v.trunc() as u64;
    Some(format!("{n}x{n}"))
}

pub fn resolve_square(size: &SizeQuery) -> Option<&'static SquareRow> {
    let key = composite_key(size)?;
    square::SQUARE_TUBE.iter().find(|r| r.size == key)
}

pub fn resolve_square_polish(size: &SizeQuery) -> Option<f64> {
    let key = composite_key(size)?;
    square::POLISH_SQUARE
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, p)| *p)
}

pub fn resolve_angle(size: &SizeQuery, rolling: RollingState) -> Option<&'static AngleRow> {
    let key = composite_key(size)?;
    let table = match rolling {
        RollingState::Hot => angle::ANGLE_HOT,
        RollingState::Cold => angle::ANGLE_COLD,
    };
    table.iter().find(|r| r.size == key)
}

/// 평철 폭은 정수로 자른 뒤 정확히 일치해야 한다.
pub fn resolve_flat(size: &SizeQuery, rolling: RollingState) -> Option<&'static FlatRow> {
    let width = size.as_number()?;
    if width < 0.0 {
        return None;
    }
    let width = width.trunc() as u32;
    let table = match rolling {
        RollingState::Cold => flat::FLAT_COLD,
        RollingState::Hot => flat::FLAT_HOT,
    };
    table.iter().find(|r| r.width_mm == width)
}

/// 파이프 호칭경은 라벨 정확 일치만 허용한다. 정수 숫자는 라벨로 바꿔서 찾는다.
pub fn resolve_pipe(size: &SizeQuery) -> Option<&'static PipeRow> {
    let label = match size {
        SizeQuery::Numeric(v) if v.is_finite() && v.fract() == 0.0 && *v >= 0.0 => {
            format!("{}", *v as u64)
        }
        SizeQuery::Numeric(_) => return None,
        SizeQuery::Text(s) => s.trim().to_string(),
    };
    pipe::SCHEDULE_PIPE.iter().find(|r| r.bore == label)
}

/// 형상별 규칙으로 사이즈 키를 확정한다. 매칭이 없으면 `None`.
///
/// 평철/앵글은 압연 상태별 테이블을 쓰며, 지정하지 않으면 형상별 기본값을 쓴다.
/// 판재는 연속 치수라 키가 없다.
pub fn resolve_size(
    kind: GeometryKind,
    size: &SizeQuery,
    rolling: Option<RollingState>,
) -> Option<SizeKey> {
    let rolling = rolling.or_else(|| RollingState::default_for(kind));
    let key = match kind {
        GeometryKind::Round => resolve_round(size).map(|m| SizeKey::Diameter(m.od_mm())),
        GeometryKind::Square => {
            resolve_square(size).map(|r| SizeKey::Composite(r.size.to_string()))
        }
        GeometryKind::Flat => {
            resolve_flat(size, rolling?).map(|r| SizeKey::Width(r.width_mm))
        }
        GeometryKind::Angle => {
            resolve_angle(size, rolling?).map(|r| SizeKey::Composite(r.size.to_string()))
        }
        GeometryKind::SchedulePipe => resolve_pipe(size).map(|r| SizeKey::Bore(r.bore)),
        GeometryKind::Sheet => None,
    };
    if key.is_none() {
        tracing::debug!(%kind, ?size, "no catalog match");
    }
    key
}

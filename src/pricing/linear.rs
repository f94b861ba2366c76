//! 원형관/각관/평철/앵글/파이프의 미터당 단가 조회.

use serde::Serialize;

use super::finish::{FinishDescriptor, PriceColumn};
use super::rounding::round2;
use crate::catalog::flat::FINE_BRUSH_SURCHARGE;
use crate::catalog::{GeometryKind, RollingState};
use crate::size_resolver::{self, RoundMatch, SizeKey, SizeQuery};

/// 조회된 미터당 단가.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnitPrice {
    pub kind: GeometryKind,
    pub size_key: SizeKey,
    /// 평철/앵글에서 실제 사용한 압연 테이블
    pub rolling: Option<RollingState>,
    pub column: PriceColumn,
    pub base_price: f64,
    /// 마감 할증 배수 (할증 없으면 1.0)
    pub multiplier: f64,
    pub price: f64,
}

/// 사이즈와 마감으로 미터당 단가를 조회한다.
///
/// 사이즈 미매칭, 마감 열 없음, 단가표의 0 셀(미견적)은 모두 `None`(견적 불가)이다.
pub fn lookup_linear_price(
    kind: GeometryKind,
    size: &SizeQuery,
    rolling: Option<RollingState>,
    finish: &str,
) -> Option<UnitPrice> {
    let finish = FinishDescriptor::parse(finish);
    let rolling = rolling.or_else(|| RollingState::default_for(kind));
    let priced = match kind {
        GeometryKind::Round => price_round(size, &finish),
        GeometryKind::Square => price_square(size, &finish),
        GeometryKind::Flat => price_flat(size, rolling?, &finish),
        GeometryKind::Angle => {
            let row = size_resolver::resolve_angle(size, rolling?)?;
            let column = finish.angle_column();
            let base = match column {
                PriceColumn::InsideOutside => row.inside_outside,
                _ => row.both_sides,
            };
            Some(Priced::plain(SizeKey::Composite(row.size.to_string()), column, base))
        }
        GeometryKind::SchedulePipe => {
            let row = size_resolver::resolve_pipe(size)?;
            let column = finish.pipe_column();
            let base = match column {
                PriceColumn::Sch40 => row.sch40,
                _ => row.sch10,
            };
            Some(Priced::plain(SizeKey::Bore(row.bore), column, base))
        }
        GeometryKind::Sheet => {
            tracing::debug!("sheet is priced per piece, not per metre");
            None
        }
    }?;

    if priced.price <= 0.0 {
        tracing::debug!(%kind, size_key = %priced.size_key, "unpriced catalog cell");
        return None;
    }
    Some(UnitPrice {
        kind,
        size_key: priced.size_key,
        rolling: match kind {
            GeometryKind::Flat | GeometryKind::Angle => rolling,
            _ => None,
        },
        column: priced.column,
        base_price: priced.base,
        multiplier: priced.multiplier,
        price: priced.price,
    })
}

/// 기존 호출부 호환용. 견적 불가는 0을 반환하므로 "무료"와 구분되지 않는다.
pub fn resolve_and_price_linear(
    kind: GeometryKind,
    size: &SizeQuery,
    rolling: Option<RollingState>,
    finish: &str,
) -> f64 {
    lookup_linear_price(kind, size, rolling, finish)
        .map(|p| p.price)
        .unwrap_or(0.0)
}

struct Priced {
    size_key: SizeKey,
    column: PriceColumn,
    base: f64,
    multiplier: f64,
    price: f64,
}

impl Priced {
    fn plain(size_key: SizeKey, column: PriceColumn, base: f64) -> Self {
        Self {
            size_key,
            column,
            base,
            multiplier: 1.0,
            price: base,
        }
    }
}

fn price_round(size: &SizeQuery, finish: &FinishDescriptor) -> Option<Priced> {
    let matched = size_resolver::resolve_round(size)?;
    let key = SizeKey::Diameter(matched.od_mm());
    match matched {
        RoundMatch::Standard(row) => {
            let column = finish.round_column();
            let base = match column {
                PriceColumn::Brushed400 => row.brushed_400,
                PriceColumn::Mirror => row.mirror,
                PriceColumn::Polish => {
                    // 연마는 별도 표에서 다시 매칭하며, 키도 연마표 외경을 쓴다.
                    let polish = size_resolver::resolve_round_polish(size)?;
                    return Some(Priced::plain(
                        SizeKey::Diameter(polish.od_mm),
                        column,
                        polish.price,
                    ));
                }
                _ => row.brushed_180,
            };
            Some(Priced::plain(key, column, base))
        }
        RoundMatch::Large(row) => {
            let column = finish.large_round_column();
            let base = match column {
                PriceColumn::Brushed400 => row.brushed_400,
                PriceColumn::Mirror => row.mirror,
                _ => row.brushed_180,
            };
            Some(Priced::plain(key, column, base))
        }
        RoundMatch::LargePipe(pipe) => Some(Priced::plain(key, PriceColumn::Fixed, pipe.price)),
    }
}

fn price_square(size: &SizeQuery, finish: &FinishDescriptor) -> Option<Priced> {
    let column = finish.square_column();
    if column == PriceColumn::Polish {
        // 연마표는 각관 표에 있는 사이즈에 대해서만 조회한다.
        let row = size_resolver::resolve_square(size)?;
        let price = size_resolver::resolve_square_polish(size)?;
        return Some(Priced::plain(SizeKey::Composite(row.size.to_string()), column, price));
    }
    let row = size_resolver::resolve_square(size)?;
    let base = match column {
        PriceColumn::Dual180And400 => row.dual_180_400,
        PriceColumn::Brushed400 => row.brushed_400,
        _ => row.brushed_180,
    };
    Some(Priced::plain(SizeKey::Composite(row.size.to_string()), column, base))
}

fn price_flat(size: &SizeQuery, rolling: RollingState, finish: &FinishDescriptor) -> Option<Priced> {
    let row = size_resolver::resolve_flat(size, rolling)?;
    let column = finish.flat_sides();
    let base = match column {
        PriceColumn::AllRound => row.all_round,
        PriceColumn::BothSides => row.both_sides,
        _ => row.one_side,
    };
    let multiplier = if finish.is_fine_brush() {
        1.0 + FINE_BRUSH_SURCHARGE
    } else {
        1.0
    };
    Some(Priced {
        size_key: SizeKey::Width(row.width_mm),
        column,
        base,
        multiplier,
        price: round2(base * multiplier),
    })
}

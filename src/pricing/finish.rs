//! 마감(finish) 문자열 해석.
//!
//! 대소문자 무시, 앞뒤 공백 제거, `#` 제거 후 부분 문자열로 단가 열을 고른다.

use serde::Serialize;

/// 선택된 단가 열.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceColumn {
    Brushed180,
    Brushed400,
    Mirror,
    Polish,
    Dual180And400,
    OneSide,
    BothSides,
    AllRound,
    InsideOutside,
    Sch10,
    Sch40,
    /// 대구경 파이프 고정 단가 (마감 무관)
    Fixed,
}

/// 정규화된 마감 기술자.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinishDescriptor {
    normalized: String,
}

impl FinishDescriptor {
    pub fn parse(raw: &str) -> Self {
        Self {
            normalized: raw.trim().replace('#', "").to_lowercase(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.normalized
    }

    fn has(&self, needle: &str) -> bool {
        self.normalized.contains(needle)
    }

    /// 400# 계열 (평철에서는 30% 할증)
    pub fn is_fine_brush(&self) -> bool {
        self.has("400")
    }

    /// 원형관: 400 → 미러 → 연마 → 180 순서로 판정.
    pub fn round_column(&self) -> PriceColumn {
        if self.has("400") {
            PriceColumn::Brushed400
        } else if self.has("mirror") {
            PriceColumn::Mirror
        } else if self.has("polish") {
            PriceColumn::Polish
        } else {
            PriceColumn::Brushed180
        }
    }

    /// 대구경 원형관에는 연마 열이 없어 180으로 떨어진다.
    pub fn large_round_column(&self) -> PriceColumn {
        match self.round_column() {
            PriceColumn::Polish => PriceColumn::Brushed180,
            other => other,
        }
    }

    pub fn square_column(&self) -> PriceColumn {
        if self.has("400") && self.has("180") {
            PriceColumn::Dual180And400
        } else if self.has("400") {
            PriceColumn::Brushed400
        } else if self.has("polish") {
            PriceColumn::Polish
        } else {
            PriceColumn::Brushed180
        }
    }

    pub fn flat_sides(&self) -> PriceColumn {
        if self.has("all") {
            PriceColumn::AllRound
        } else if self.has("both") {
            PriceColumn::BothSides
        } else {
            PriceColumn::OneSide
        }
    }

    pub fn angle_column(&self) -> PriceColumn {
        if self.has("inside") || self.has("io") || self.has("out") {
            PriceColumn::InsideOutside
        } else {
            PriceColumn::BothSides
        }
    }

    pub fn pipe_column(&self) -> PriceColumn {
        if self.has("40") {
            PriceColumn::Sch40
        } else {
            PriceColumn::Sch10
        }
    }
}

/// 면적 단가표 키 형식(대문자, 트림).
pub fn area_rate_key(raw: &str) -> String {
    raw.trim().to_uppercase()
}

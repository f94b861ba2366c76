//! 단가 조회 및 견적 계산 모듈 모음.

pub mod finish;
pub mod finishing;
pub mod linear;
pub mod piece;
pub mod rounding;

pub use finishing::*;
pub use linear::*;
pub use piece::*;

use thiserror::Error;

/// 견적 계산 오류. 호출자가 고칠 수 있는 입력 오류만 존재한다.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PricingError {
    #[error("입력 오류: {0}")]
    InvalidInput(&'static str),
}

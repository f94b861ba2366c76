//! 결과 표시용 단위. 계산은 항상 mm / kg / m² 기준으로 하고 출력할 때만 변환한다.

pub mod area;
pub mod length;
pub mod mass;

pub use area::{convert_area, AreaUnit};
pub use length::{convert_length, LengthUnit};
pub use mass::{convert_mass, MassUnit};

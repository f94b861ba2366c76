//! 스테인리스 자재 단가/코일 계산 로직을 라이브러리로 분리하여 CLI 외의 호출부에서도 쓸 수 있게 한다.
//!
//! 모든 단가표와 비중표는 정적 상수이며 변경되지 않으므로 여러 스레드에서 잠금 없이 호출할 수 있다.

pub mod app;
pub mod catalog;
pub mod coil;
pub mod config;
pub mod i18n;
pub mod logging;
pub mod material_db;
pub mod pricing;
pub mod size_resolver;
pub mod ui_cli;
pub mod units;

pub use catalog::{list_sizes, GeometryKind, RollingState};
pub use coil::{solve_coil, CoilError, CoilResult, CoilSpecification};
pub use pricing::{
    lookup_linear_price, price_finishing, price_sheet_piece, resolve_and_price_linear,
    FinishJob, PricingError, PricingResult, UnitPrice,
};
pub use size_resolver::{resolve_size, SizeKey, SizeQuery};

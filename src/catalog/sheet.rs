//! 판재(Sheet/Plate) 및 코일 표면처리 면적 단가표. 단위: 통화/m².
//!
//! 두께 3mm 이하는 냉연, 3mm 초과는 열연 테이블을 쓴다.
//! 2mm 이하 코일은 냉연 판재와 같은 단가를 쓴다.

/// 표준 원판 규격 (길이, 폭) [mm]
pub const STANDARD_SHEET_MM: (f64, f64) = (2500.0, 1250.0);
/// 표준 원판 면적 대비 이 비율 이상이면 원판으로 본다.
pub const FULL_SHEET_RATIO: f64 = 0.95;
/// 이 면적[m²] 이상이면 대형 절단품이다.
pub const LARGE_PIECE_MIN_AREA_M2: f64 = 1.0;
pub const LARGE_PIECE_MARKUP: f64 = 0.40;
pub const SMALL_PIECE_MARKUP: f64 = 0.60;

/// 절단품 1건 최소 청구액
pub const MIN_CHARGE_PIECE: f64 = 222.52;
/// 코일 작업 1건 최소 청구액
pub const MIN_CHARGE_JOB: f64 = 145.00;

/// 이 두께[mm] 이하면 냉연이다.
pub const COLD_ROLLED_MAX_THICKNESS_MM: f64 = 3.0;

pub const DEFAULT_COLD_RATE: f64 = 34.08;
pub const DEFAULT_HOT_RATE: f64 = 325.40;
pub const DEFAULT_SMALL_COIL_RATE: f64 = 58.53;

/// 냉연 절단품 단가 (마감별).
pub const SHEET_COLD: &[(&str, f64)] = &[
    ("N4 + PVC", 34.08),
    ("LASER PVC", 28.78),
    ("PLAIN PVC", 27.36),
    ("N4 ONLY", 9.84),
    ("SATIN", 18.91),
    ("3CR12/409", 38.23),
    ("ALUMINIUM", 19.50),
];

/// 열연 절단품 단가. 두께별로 N4 단독 / N4+PVC 두 가지.
#[derive(Debug, Clone, Copy)]
pub struct HotSheetRow {
    pub thickness_mm: f64,
    pub n4_only: f64,
    pub n4_pvc: f64,
}

pub const SHEET_HOT: &[HotSheetRow] = &[
    hot(4.5, 325.40, 371.56),
    hot(6.0, 325.40, 371.56),
    hot(8.0, 325.40, 378.54),
    hot(10.0, 325.40, 385.50),
];

/// 냉연 면적 마감 단가 (판재 3mm 이하, 코일 2mm 이하).
pub const FINISH_COLD: &[(&str, f64)] = &[
    ("N4 + PVC", 34.08),
    ("N4 LASER PVC", 34.08),
    ("LASER PVC", 28.78),
    ("PVC ONLY", 28.78),
    ("PLAIN PVC", 27.36),
    ("N4 ONLY", 9.84),
    ("N4", 9.84),
    ("0.5MM N4", 25.76),
    ("SATIN", 18.91),
    ("3CR12", 38.23),
    ("409", 38.23),
    ("80#", 38.23),
    ("ALUMINIUM", 19.50),
    ("COLD ROLLED NO PVC", 136.00),
];

/// 열연 면적 마감 단가 (3mm 초과).
pub const FINISH_HOT: &[(&str, f64)] = &[
    ("N4 ONLY", 325.40),
    ("N4", 325.40),
    ("6MM N4 PVC", 371.56),
    ("8MM N4 PVC", 378.54),
    ("10MM N4 PVC", 385.50),
];

/// 소형 코일 마감 단가.
pub const SMALL_COIL_FINISH: &[(&str, f64)] = &[
    ("N4 + PVC", 58.53),
    ("N4 PVC", 58.53),
    ("PVC ONLY", 31.35),
    ("LASER PVC", 31.35),
    ("N4 ONLY", 29.00),
    ("N4", 29.00),
];

/// 6000x1500 대형 후판의 장당 고정 단가.
#[derive(Debug, Clone, Copy)]
pub struct LargePlate {
    pub length_mm: f64,
    pub width_mm: f64,
    pub thickness_mm: f64,
    pub price_per_sheet: f64,
}

impl LargePlate {
    /// "6000x1500x3.0" 형식의 키
    pub fn key(&self) -> String {
        format!(
            "{}x{}x{:.1}",
            self.length_mm, self.width_mm, self.thickness_mm
        )
    }
}

pub const LARGE_PLATES: &[LargePlate] = &[
    plate(6000.0, 1500.0, 3.0, 146.59),
    plate(6000.0, 1500.0, 4.5, 463.05),
    plate(6000.0, 1500.0, 8.0, 1477.96),
];

/// 마감 키로 면적 단가를 조회한다. 키는 이미 대문자/트림 상태여야 한다.
pub fn rate_for(table: &[(&str, f64)], finish_key: &str) -> Option<f64> {
    table
        .iter()
        .find(|(name, _)| *name == finish_key)
        .map(|(_, rate)| *rate)
}

/// 두께가 정확히 일치하는 열연 행을 찾는다.
pub fn hot_row(thickness_mm: f64) -> Option<&'static HotSheetRow> {
    SHEET_HOT.iter().find(|r| r.thickness_mm == thickness_mm)
}

/// 길이/폭/두께가 정확히 일치하는 대형 후판 단가를 찾는다. 길이와 폭은 순서를 가리지 않는다.
pub fn large_plate_price(length_mm: f64, width_mm: f64, thickness_mm: f64) -> Option<f64> {
    LARGE_PLATES
        .iter()
        .find(|p| {
            p.thickness_mm == thickness_mm
                && ((p.length_mm == length_mm && p.width_mm == width_mm)
                    || (p.length_mm == width_mm && p.width_mm == length_mm))
        })
        .map(|p| p.price_per_sheet)
}

const fn hot(thickness_mm: f64, n4_only: f64, n4_pvc: f64) -> HotSheetRow {
    HotSheetRow {
        thickness_mm,
        n4_only,
        n4_pvc,
    }
}

const fn plate(length_mm: f64, width_mm: f64, thickness_mm: f64, price_per_sheet: f64) -> LargePlate {
    LargePlate {
        length_mm,
        width_mm,
        thickness_mm,
        price_per_sheet,
    }
}

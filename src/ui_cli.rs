use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::app::AppError;
use crate::catalog::{GeometryKind, RollingState};
use crate::coil::{CoilResult, DEFAULT_INNER_DIAMETER_MM};
use crate::config::{DefaultUnits, DEFAULT_CONFIG_PATH};
use crate::i18n::{keys, Translator};
use crate::pricing::{FinishJob, FinishingQuote, PieceTier, PricingResult, UnitPrice};
use crate::size_resolver::{SizeKey, SizeQuery};
use crate::units::{convert_area, convert_length, convert_mass, AreaUnit, LengthUnit, MassUnit};

/// 스테인리스 자재 단가/코일 계산기.
#[derive(Debug, Parser)]
#[command(name = "metal_pricing_toolbox_cli", version, about)]
pub struct Cli {
    /// 설정 파일 경로 (없으면 기본값으로 생성)
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,
    /// 출력 언어 (ko/en/auto)
    #[arg(long, global = true)]
    pub lang: Option<String>,
    /// 결과를 JSON으로 출력
    #[arg(long, global = true)]
    pub json: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// 원형관 미터당 단가 (외경 mm, 1mm 허용오차)
    Round {
        size: SizeQuery,
        /// 180 / 400 / mirror / polish
        #[arg(long, default_value = "180")]
        finish: String,
    },
    /// 각관 미터당 단가 ("40x40" 또는 40)
    Square {
        size: SizeQuery,
        /// 180 / 400 / 180-400 / polish
        #[arg(long, default_value = "180")]
        finish: String,
    },
    /// 평철 미터당 단가 (폭 mm)
    Flat {
        width: SizeQuery,
        #[arg(long, value_enum, default_value_t = Sides::One)]
        sides: Sides,
        /// 400이면 30% 할증
        #[arg(long, default_value = "180")]
        finish: String,
        /// cold / hot (기본 cold)
        #[arg(long)]
        rolling: Option<RollingState>,
    },
    /// 앵글 미터당 단가 ("50x50" 또는 50)
    Angle {
        size: SizeQuery,
        /// both / inside-outside
        #[arg(long, default_value = "both")]
        finish: String,
        /// cold / hot (기본 hot)
        #[arg(long)]
        rolling: Option<RollingState>,
    },
    /// 스케줄 파이프 미터당 단가 (호칭경, 예: "1 1/2")
    Pipe {
        size: SizeQuery,
        #[arg(long, default_value = "SCH10")]
        schedule: String,
    },
    /// 판재 절단품/원판 견적
    Sheet {
        length_mm: f64,
        width_mm: f64,
        thickness_mm: f64,
        #[arg(long, default_value = "N4 + PVC")]
        finish: String,
    },
    /// 코일 질량/외경/길이 환산
    Coil {
        #[arg(long)]
        mass: Option<f64>,
        #[arg(long)]
        od: Option<f64>,
        #[arg(long, default_value_t = DEFAULT_INNER_DIAMETER_MM)]
        id: f64,
        #[arg(long)]
        width: f64,
        #[arg(long)]
        thickness: f64,
        #[arg(long, default_value = "304")]
        grade: String,
        /// 지정하면 코일 면적으로 표면처리 견적도 함께 낸다
        #[arg(long)]
        finish: Option<String>,
    },
    /// 면적 기준 표면처리 견적
    Finish {
        area_m2: f64,
        #[arg(long, default_value = "N4 + PVC")]
        finish: String,
        #[arg(long, default_value_t = 0.0)]
        thickness: f64,
        #[arg(long, value_enum, default_value_t = JobArg::Sheet)]
        job: JobArg,
    },
    /// 형상별 사이즈 목록
    Sizes { kind: GeometryKind },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Sides {
    One,
    Both,
    All,
}

impl Sides {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sides::One => "one",
            Sides::Both => "both",
            Sides::All => "all",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum JobArg {
    Sheet,
    Coil,
    SmallCoil,
}

impl From<JobArg> for FinishJob {
    fn from(value: JobArg) -> Self {
        match value {
            JobArg::Sheet => FinishJob::Sheet,
            JobArg::Coil => FinishJob::Coil,
            JobArg::SmallCoil => FinishJob::SmallCoil,
        }
    }
}

fn line(out: &mut impl Write, tr: &Translator, key: &str, value: impl std::fmt::Display) -> Result<(), AppError> {
    writeln!(out, "{}: {value}", tr.t(key))?;
    Ok(())
}

/// 미터당 단가 결과를 출력한다.
pub fn print_unit_price(
    out: &mut impl Write,
    tr: &Translator,
    price: Option<&UnitPrice>,
) -> Result<(), AppError> {
    writeln!(out, "{}", tr.t(keys::LINEAR_HEADING))?;
    let Some(p) = price else {
        writeln!(out, "{}", tr.t(keys::UNPRICED))?;
        return Ok(());
    };
    line(out, tr, keys::SIZE_KEY, &p.size_key)?;
    if let Some(rolling) = p.rolling {
        line(out, tr, keys::ROLLING, rolling)?;
    }
    line(out, tr, keys::COLUMN, format!("{:?}", p.column))?;
    if p.multiplier != 1.0 {
        line(out, tr, keys::BASE_PRICE, format!("{:.2}", p.base_price))?;
        line(out, tr, keys::MULTIPLIER, format!("{:.2}", p.multiplier))?;
    }
    line(out, tr, keys::UNIT_PRICE, format!("{:.2}", p.price))
}

/// 판재 견적 결과를 출력한다.
pub fn print_sheet(out: &mut impl Write, tr: &Translator, r: &PricingResult) -> Result<(), AppError> {
    writeln!(out, "{}", tr.t(keys::SHEET_HEADING))?;
    line(out, tr, keys::SIZE_KEY, &r.size_key)?;
    line(out, tr, keys::AREA, format!("{:.3} m²", r.area_m2))?;
    line(out, tr, keys::THICKNESS, format!("{} mm ({})", r.thickness_mm, r.rolling))?;
    line(out, tr, keys::FINISH, &r.finish)?;
    let tier = match r.tier {
        PieceTier::FullSheet => keys::TIER_FULL_SHEET,
        PieceTier::LargePiece => keys::TIER_LARGE_PIECE,
        PieceTier::SmallPiece => keys::TIER_SMALL_PIECE,
    };
    line(out, tr, keys::TIER, tr.t(tier))?;
    line(out, tr, keys::BASE_RATE, format!("{:.2}", r.base_price_sqm))?;
    line(out, tr, keys::MARKUP, format!("{:.0}%", r.markup * 100.0))?;
    line(out, tr, keys::FINAL_RATE, format!("{:.2}", r.final_price_sqm))?;
    line(out, tr, keys::SUBTOTAL, format!("{:.2}", r.subtotal))?;
    line(out, tr, keys::TOTAL, format!("{:.2}", r.total))?;
    line(out, tr, keys::MIN_APPLIED, tr.yes_no(r.min_applied))
}

/// 코일 결과를 설정된 표시 단위로 출력한다. 입력은 반올림 전 값이어야 한다.
pub fn print_coil(
    out: &mut impl Write,
    tr: &Translator,
    coil: &CoilResult,
    units: &DefaultUnits,
) -> Result<(), AppError> {
    let mm = LengthUnit::Millimeter;
    writeln!(out, "{}", tr.t(keys::COIL_HEADING))?;
    line(out, tr, keys::GRADE, &coil.grade)?;
    line(out, tr, keys::DENSITY, coil.density)?;
    if coil.density_fallback {
        writeln!(out, "  ! {}", tr.t(keys::DENSITY_FALLBACK))?;
    }
    let mass = convert_mass(coil.mass_kg, MassUnit::Kilogram, units.mass);
    line(out, tr, keys::MASS, format!("{mass:.2} {}", units.mass.symbol()))?;
    let length = convert_length(coil.length_m, LengthUnit::Meter, units.length);
    line(out, tr, keys::LENGTH, format!("{length:.2} {}", units.length.symbol()))?;
    let area = convert_area(coil.area_m2, AreaUnit::SquareMeter, units.area);
    line(out, tr, keys::AREA, format!("{area:.2} {}", units.area.symbol()))?;
    let od = convert_length(coil.outer_diameter_mm, mm, units.diameter);
    line(out, tr, keys::OUTER_DIAMETER, format!("{od:.1} {}", units.diameter.symbol()))?;
    let id = convert_length(coil.inner_diameter_mm, mm, units.diameter);
    line(out, tr, keys::INNER_DIAMETER, format!("{id:.1} {}", units.diameter.symbol()))?;
    line(out, tr, keys::WIDTH, format!("{} mm", coil.width_mm))?;
    line(out, tr, keys::THICKNESS, format!("{} mm", coil.thickness_mm))?;
    line(out, tr, keys::KG_PER_SQM, format!("{:.3}", coil.kg_per_sqm))?;
    line(out, tr, keys::SQM_PER_TON, format!("{:.2}", coil.sqm_per_ton))?;
    line(out, tr, keys::SQM_PER_KG, format!("{:.4}", coil.sqm_per_kg))
}

pub fn print_finishing(out: &mut impl Write, tr: &Translator, q: &FinishingQuote) -> Result<(), AppError> {
    writeln!(out, "{}", tr.t(keys::FINISHING_HEADING))?;
    line(out, tr, keys::AREA, format!("{:.2} m²", q.area_m2))?;
    line(out, tr, keys::FINISH, format!("{} ({})", q.finish, q.rolling))?;
    line(out, tr, keys::BASE_RATE, format!("{:.2}", q.price_sqm))?;
    line(out, tr, keys::SUBTOTAL, format!("{:.2}", q.subtotal))?;
    line(out, tr, keys::MIN_CHARGE, format!("{:.2}", q.minimum_charge))?;
    line(out, tr, keys::TOTAL, format!("{:.2}", q.total))?;
    line(out, tr, keys::MIN_APPLIED, tr.yes_no(q.min_applied))
}

pub fn print_sizes(
    out: &mut impl Write,
    tr: &Translator,
    kind: GeometryKind,
    sizes: &[SizeKey],
) -> Result<(), AppError> {
    writeln!(out, "{} ({kind})", tr.t(keys::SIZES_HEADING))?;
    if sizes.is_empty() {
        writeln!(out, "{}", tr.t(keys::SIZES_EMPTY))?;
        return Ok(());
    }
    let joined: Vec<String> = sizes.iter().map(|s| s.to_string()).collect();
    writeln!(out, "{}", joined.join(", "))?;
    Ok(())
}

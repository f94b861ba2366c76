use std::io::Write;

use serde::Serialize;
use serde_json::json;
use thiserror::Error;

use crate::catalog::{self, GeometryKind, RollingState};
use crate::coil::{self, CoilError};
use crate::config::{ConfigError, DefaultUnits, OutputFormat};
use crate::i18n::Translator;
use crate::pricing::{self, PricingError};
use crate::size_resolver::SizeQuery;
use crate::ui_cli::{self, Command};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    #[error("코일 계산 오류: {0}")]
    Coil(#[from] CoilError),
    #[error("견적 계산 오류: {0}")]
    Pricing(#[from] PricingError),
    #[error("JSON 직렬화 오류: {0}")]
    Json(#[from] serde_json::Error),
}

/// 명령 실행에 필요한 출력 설정.
#[derive(Debug, Clone)]
pub struct Context {
    pub output: OutputFormat,
    pub units: DefaultUnits,
    pub tr: Translator,
}

fn emit_json(out: &mut impl Write, value: &impl Serialize) -> Result<(), AppError> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

fn linear(
    out: &mut impl Write,
    ctx: &Context,
    kind: GeometryKind,
    size: &SizeQuery,
    rolling: Option<RollingState>,
    finish: &str,
) -> Result<(), AppError> {
    let price = pricing::lookup_linear_price(kind, size, rolling, finish);
    match ctx.output {
        OutputFormat::Json => emit_json(
            out,
            &json!({
                "kind": kind,
                "finish": finish,
                "priced": price.is_some(),
                "result": price,
            }),
        ),
        OutputFormat::Text => ui_cli::print_unit_price(out, &ctx.tr, price.as_ref()),
    }
}

/// 하나의 CLI 명령을 실행하고 결과를 `out`에 쓴다.
pub fn run(command: &Command, ctx: &Context, out: &mut impl Write) -> Result<(), AppError> {
    match command {
        Command::Round { size, finish } => {
            linear(out, ctx, GeometryKind::Round, size, None, finish)
        }
        Command::Square { size, finish } => {
            linear(out, ctx, GeometryKind::Square, size, None, finish)
        }
        Command::Flat {
            width,
            sides,
            finish,
            rolling,
        } => {
            // 면 수와 마감을 하나의 기술자로 합친다.
            let descriptor = format!("{} {finish}", sides.as_str());
            linear(out, ctx, GeometryKind::Flat, width, *rolling, &descriptor)
        }
        Command::Angle {
            size,
            finish,
            rolling,
        } => linear(out, ctx, GeometryKind::Angle, size, *rolling, finish),
        Command::Pipe { size, schedule } => {
            linear(out, ctx, GeometryKind::SchedulePipe, size, None, schedule)
        }
        Command::Sheet {
            length_mm,
            width_mm,
            thickness_mm,
            finish,
        } => {
            let result = pricing::price_sheet_piece(*length_mm, *width_mm, *thickness_mm, finish)?;
            match ctx.output {
                OutputFormat::Json => emit_json(out, &result),
                OutputFormat::Text => ui_cli::print_sheet(out, &ctx.tr, &result),
            }
        }
        Command::Coil {
            mass,
            od,
            id,
            width,
            thickness,
            grade,
            finish,
        } => {
            let result = coil::solve_coil(*mass, *od, *id, *width, *thickness, grade)?;
            let quote = finish
                .as_deref()
                .map(|f| pricing::quote_coil_finishing(&result, f))
                .transpose()?;
            match ctx.output {
                OutputFormat::Json => emit_json(
                    out,
                    &json!({ "coil": result.rounded(), "finishing": quote }),
                ),
                OutputFormat::Text => {
                    ui_cli::print_coil(out, &ctx.tr, &result, &ctx.units)?;
                    if let Some(q) = &quote {
                        ui_cli::print_finishing(out, &ctx.tr, q)?;
                    }
                    Ok(())
                }
            }
        }
        Command::Finish {
            area_m2,
            finish,
            thickness,
            job,
        } => {
            let quote = pricing::price_finishing(*area_m2, finish, *thickness, (*job).into())?;
            match ctx.output {
                OutputFormat::Json => emit_json(out, &quote),
                OutputFormat::Text => ui_cli::print_finishing(out, &ctx.tr, &quote),
            }
        }
        Command::Sizes { kind } => {
            let sizes = catalog::list_sizes(*kind);
            match ctx.output {
                OutputFormat::Json => emit_json(out, &json!({ "kind": kind, "sizes": sizes })),
                OutputFormat::Text => ui_cli::print_sizes(out, &ctx.tr, *kind, &sizes),
            }
        }
    }
}

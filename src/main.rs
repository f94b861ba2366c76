use std::io;

use clap::Parser;
use metal_pricing_toolbox::app::{self, AppError, Context};
use metal_pricing_toolbox::config::{self, OutputFormat};
use metal_pricing_toolbox::i18n::{self, keys, Translator};
use metal_pricing_toolbox::logging;
use metal_pricing_toolbox::ui_cli::Cli;

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 명령을 실행한다.
fn main() {
    let cli = Cli::parse();
    if let Err(err) = try_run(&cli) {
        let tr = Translator::new(&i18n::resolve_language(cli.lang.as_deref(), "auto"));
        eprintln!("{}: {err}", tr.t(keys::ERROR_PREFIX));
        std::process::exit(1);
    }
}

fn try_run(cli: &Cli) -> Result<(), AppError> {
    let cfg = config::load_or_default(&cli.config)?;
    logging::init(&cfg.log_level);
    tracing::debug!(config = %cli.config.display(), "config loaded");

    let lang = i18n::resolve_language(cli.lang.as_deref(), &cfg.language);
    let ctx = Context {
        output: if cli.json {
            OutputFormat::Json
        } else {
            cfg.output
        },
        units: cfg.default_units.clone(),
        tr: Translator::new_with_pack(&lang, cfg.locale_dir.as_deref()),
    };
    let stdout = io::stdout();
    app::run(&cli.command, &ctx, &mut stdout.lock())
}

use metal_pricing_toolbox::config::{self, Config, ConfigError, OutputFormat};
use metal_pricing_toolbox::i18n::{self, keys, Language, Translator};
use metal_pricing_toolbox::material_db;
use metal_pricing_toolbox::units::{
    convert_area, convert_length, convert_mass, AreaUnit, LengthUnit, MassUnit,
};

fn assert_close(label: &str, actual: f64, expected: f64, tol: f64) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tol,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.8}, tol {tol})"
    );
}

#[test]
fn config_defaults() {
    let cfg = Config::default();
    assert_eq!(cfg.language, "auto");
    assert_eq!(cfg.output, OutputFormat::Text);
    assert_eq!(cfg.log_level, "warn");
    assert!(cfg.locale_dir.is_none());
    assert_eq!(cfg.default_units.diameter, LengthUnit::Millimeter);
    assert_eq!(cfg.default_units.mass, MassUnit::Kilogram);
}

#[test]
fn partial_toml_fills_missing_fields() {
    let cfg = Config::from_toml(
        r#"
language = "ko"
output = "json"

[default_units]
mass = "tonne"
"#,
    )
    .expect("config");
    assert_eq!(cfg.language, "ko");
    assert_eq!(cfg.output, OutputFormat::Json);
    assert_eq!(cfg.log_level, "warn");
    assert_eq!(cfg.default_units.mass, MassUnit::Tonne);
    assert_eq!(cfg.default_units.length, LengthUnit::Meter);
}

#[test]
fn invalid_toml_is_a_parse_error() {
    assert!(matches!(
        Config::from_toml("output = \"xml\""),
        Err(ConfigError::Parse(_))
    ));
    assert!(matches!(Config::from_toml("language = "), Err(ConfigError::Parse(_))));
}

#[test]
fn toml_round_trip() {
    let mut cfg = Config::default();
    cfg.language = "en".into();
    cfg.default_units.area = AreaUnit::SquareFoot;
    let text = cfg.to_toml().expect("serialize");
    let back = Config::from_toml(&text).expect("parse");
    assert_eq!(back.language, "en");
    assert_eq!(back.default_units.area, AreaUnit::SquareFoot);
}

#[test]
fn load_or_default_creates_missing_file() {
    let dir = std::env::temp_dir().join(format!("metal_pricing_cfg_{}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("tmp dir");
    let path = dir.join("config.toml");
    let _ = std::fs::remove_file(&path);

    let cfg = config::load_or_default(&path).expect("load");
    assert_eq!(cfg.language, "auto");
    assert!(path.exists());
    let again = config::load_or_default(&path).expect("reload");
    assert_eq!(again.log_level, cfg.log_level);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn translator_builtin_strings() {
    let ko = Translator::new("ko_KR");
    assert_eq!(ko.language(), Language::Ko);
    assert_eq!(ko.t(keys::TOTAL), "합계");
    assert_eq!(ko.yes_no(true), "예");

    let en = Translator::new("de");
    assert_eq!(en.language(), Language::En);
    assert_eq!(en.t(keys::TOTAL), "Total");
    assert_eq!(en.t("no.such.key"), "no.such.key");
}

#[test]
fn translator_pack_overrides_builtin() {
    let dir = std::env::temp_dir().join(format!("metal_pricing_pack_{}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("tmp dir");
    std::fs::write(dir.join("en.toml"), "[sheet]\ntotal = \"Grand total\"\n").expect("write pack");

    let tr = Translator::new_with_pack("en", dir.to_str());
    assert_eq!(tr.t(keys::TOTAL), "Grand total");
    assert_eq!(tr.t(keys::SUBTOTAL), "Subtotal");
    // 팩이 없으면 내장 문자열만 쓴다.
    let missing = Translator::new_with_pack("ko", dir.to_str());
    assert_eq!(missing.t(keys::TOTAL), "합계");

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn language_resolution_order() {
    assert_eq!(i18n::resolve_language(Some("KO"), "en"), "ko");
    assert_eq!(i18n::resolve_language(Some("auto"), "en"), "en");
    assert_eq!(i18n::resolve_language(None, "en-US"), "en");
    let detected = i18n::resolve_language(None, "auto");
    assert!(detected == "ko" || detected == "en");
}

#[test]
fn toml_pack_is_flattened() {
    let map = i18n::parse_toml_to_map("[a]\nb = \"x\"\n[a.c]\nd = \"y\"\nn = 1\n").expect("map");
    assert_eq!(map.get("a.b").map(String::as_str), Some("x"));
    assert_eq!(map.get("a.c.d").map(String::as_str), Some("y"));
    assert!(!map.contains_key("a.c.n"));
    assert!(i18n::parse_toml_to_map("n = 1").is_none());
}

#[test]
fn unit_conversions() {
    assert_close("m→mm", convert_length(1.5, LengthUnit::Meter, LengthUnit::Millimeter), 1500.0, 1e-9);
    assert_close("in→mm", convert_length(1.0, LengthUnit::Inch, LengthUnit::Millimeter), 25.4, 1e-9);
    assert_close("ft→in", convert_length(1.0, LengthUnit::Foot, LengthUnit::Inch), 12.0, 1e-9);
    assert_close("t→kg", convert_mass(2.5, MassUnit::Tonne, MassUnit::Kilogram), 2500.0, 1e-9);
    assert_close("kg→lb", convert_mass(1.0, MassUnit::Kilogram, MassUnit::Pound), 2.204623, 1e-5);
    assert_close("m²→ft²", convert_area(1.0, AreaUnit::SquareMeter, AreaUnit::SquareFoot), 10.7639, 1e-3);
    assert_eq!(LengthUnit::Millimeter.symbol(), "mm");
    assert_eq!(AreaUnit::SquareMeter.symbol(), "m²");
}

#[test]
fn material_grades() {
    assert_eq!(material_db::grades().len(), 11);
    let g = material_db::find_grade("3cr12").expect("grade");
    assert_eq!(g.code, "3CR12");
    assert_eq!(g.density_kg_per_dm3, 8.0);
    assert_eq!(material_db::density_for("Bennox").kg_per_dm3, 8.3);
    let fallback = material_db::density_for("");
    assert!(fallback.fallback);
    assert_eq!(fallback.kg_per_dm3, material_db::DEFAULT_DENSITY_KG_PER_DM3);
}

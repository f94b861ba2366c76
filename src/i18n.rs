use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const YES: &str = "general.yes";
    pub const NO: &str = "general.no";

    pub const LINEAR_HEADING: &str = "linear.heading";
    pub const SIZE_KEY: &str = "linear.size_key";
    pub const ROLLING: &str = "linear.rolling";
    pub const COLUMN: &str = "linear.column";
    pub const BASE_PRICE: &str = "linear.base_price";
    pub const MULTIPLIER: &str = "linear.multiplier";
    pub const UNIT_PRICE: &str = "linear.unit_price";
    pub const UNPRICED: &str = "linear.unpriced";

    pub const SHEET_HEADING: &str = "sheet.heading";
    pub const AREA: &str = "sheet.area";
    pub const THICKNESS: &str = "sheet.thickness";
    pub const FINISH: &str = "sheet.finish";
    pub const TIER: &str = "sheet.tier";
    pub const TIER_FULL_SHEET: &str = "sheet.tier_full_sheet";
    pub const TIER_LARGE_PIECE: &str = "sheet.tier_large_piece";
    pub const TIER_SMALL_PIECE: &str = "sheet.tier_small_piece";
    pub const BASE_RATE: &str = "sheet.base_rate";
    pub const MARKUP: &str = "sheet.markup";
    pub const FINAL_RATE: &str = "sheet.final_rate";
    pub const SUBTOTAL: &str = "sheet.subtotal";
    pub const TOTAL: &str = "sheet.total";
    pub const MIN_APPLIED: &str = "sheet.min_applied";

    pub const COIL_HEADING: &str = "coil.heading";
    pub const GRADE: &str = "coil.grade";
    pub const DENSITY: &str = "coil.density";
    pub const DENSITY_FALLBACK: &str = "coil.density_fallback";
    pub const MASS: &str = "coil.mass";
    pub const LENGTH: &str = "coil.length";
    pub const OUTER_DIAMETER: &str = "coil.outer_diameter";
    pub const INNER_DIAMETER: &str = "coil.inner_diameter";
    pub const WIDTH: &str = "coil.width";
    pub const KG_PER_SQM: &str = "coil.kg_per_sqm";
    pub const SQM_PER_TON: &str = "coil.sqm_per_ton";
    pub const SQM_PER_KG: &str = "coil.sqm_per_kg";

    pub const FINISHING_HEADING: &str = "finishing.heading";
    pub const MIN_CHARGE: &str = "finishing.min_charge";

    pub const SIZES_HEADING: &str = "sizes.heading";
    pub const SIZES_EMPTY: &str = "sizes.empty";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        if code.to_lowercase().starts_with("ko") {
            Language::Ko
        } else {
            Language::En
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리를 받아서 번역기를 생성한다.
    /// 디렉터리나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: pack_dir.and_then(|dir| load_overrides(dir, lang_code)),
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    /// 번역을 가져온다. 언어팩 → 내장 문자열 → 키 자체 순으로 찾는다.
    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return v;
        }
        let builtin: Option<&'a str> = match self.lang {
            Language::En => en(key),
            Language::Ko => ko(key).or_else(|| en(key)),
        };
        builtin.unwrap_or(key)
    }

    pub fn yes_no(&self, value: bool) -> &str {
        if value {
            self.t(keys::YES)
        } else {
            self.t(keys::NO)
        }
    }
}

/// CLI 플래그 → 설정 → 시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: Option<&str>, config_lang: &str) -> String {
    cli_arg
        .and_then(normalize_lang)
        .or_else(|| normalize_lang(config_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(lang) = get_locale().as_deref().and_then(normalize_locale_string) {
        return Some(lang);
    }
    ["LC_ALL", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|v| normalize_locale_string(&v))
}

/// TOML 기반 언어팩을 로드한다. 형식: `[section] key = "value"` 를 "section.key"로 펼친다.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let path = Path::new(dir).join(format!("{lang}.toml"));
    let content = fs::read_to_string(path).ok()?;
    parse_toml_to_map(&content)
}

pub fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn ko(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "오류",
        YES => "예",
        NO => "아니오",
        LINEAR_HEADING => "=== 미터당 단가 ===",
        SIZE_KEY => "사이즈",
        ROLLING => "압연",
        COLUMN => "단가 열",
        BASE_PRICE => "기본 단가",
        MULTIPLIER => "할증 배수",
        UNIT_PRICE => "단가 [/m]",
        UNPRICED => "견적 불가: 단가표에 해당 사이즈/마감이 없습니다.",
        SHEET_HEADING => "=== 판재 견적 ===",
        AREA => "면적",
        THICKNESS => "두께",
        FINISH => "마감",
        TIER => "구분",
        TIER_FULL_SHEET => "원판",
        TIER_LARGE_PIECE => "절단품 (1m² 이상, +40%)",
        TIER_SMALL_PIECE => "절단품 (1m² 미만, +60%)",
        BASE_RATE => "기본 단가 [/m²]",
        MARKUP => "할증",
        FINAL_RATE => "적용 단가 [/m²]",
        SUBTOTAL => "소계",
        TOTAL => "합계",
        MIN_APPLIED => "최소 청구액 적용",
        COIL_HEADING => "=== 코일 계산 ===",
        GRADE => "재질",
        DENSITY => "비중 [kg/dm³]",
        DENSITY_FALLBACK => "등록되지 않은 재질이라 기본 비중을 사용했습니다.",
        MASS => "중량",
        LENGTH => "길이",
        OUTER_DIAMETER => "외경",
        INNER_DIAMETER => "내경",
        WIDTH => "폭",
        KG_PER_SQM => "kg/m²",
        SQM_PER_TON => "m²/t",
        SQM_PER_KG => "m²/kg",
        FINISHING_HEADING => "=== 표면처리 견적 ===",
        MIN_CHARGE => "최소 청구액",
        SIZES_HEADING => "사용 가능한 사이즈",
        SIZES_EMPTY => "(목록 없음)",
        _ => return None,
    })
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        YES => "yes",
        NO => "no",
        LINEAR_HEADING => "=== Price per metre ===",
        SIZE_KEY => "Size",
        ROLLING => "Rolling",
        COLUMN => "Price column",
        BASE_PRICE => "Base price",
        MULTIPLIER => "Multiplier",
        UNIT_PRICE => "Unit price [/m]",
        UNPRICED => "Unpriced: no catalog entry for this size/finish.",
        SHEET_HEADING => "=== Sheet piece ===",
        AREA => "Area",
        THICKNESS => "Thickness",
        FINISH => "Finish",
        TIER => "Tier",
        TIER_FULL_SHEET => "Full sheet",
        TIER_LARGE_PIECE => "Piece >= 1 m² (+40%)",
        TIER_SMALL_PIECE => "Piece < 1 m² (+60%)",
        BASE_RATE => "Base rate [/m²]",
        MARKUP => "Markup",
        FINAL_RATE => "Final rate [/m²]",
        SUBTOTAL => "Subtotal",
        TOTAL => "Total",
        MIN_APPLIED => "Minimum charge applied",
        COIL_HEADING => "=== Coil ===",
        GRADE => "Grade",
        DENSITY => "Density [kg/dm³]",
        DENSITY_FALLBACK => "Unknown grade, default density used.",
        MASS => "Mass",
        LENGTH => "Length",
        OUTER_DIAMETER => "Outer diameter",
        INNER_DIAMETER => "Inner diameter",
        WIDTH => "Width",
        KG_PER_SQM => "kg/m²",
        SQM_PER_TON => "m²/t",
        SQM_PER_KG => "m²/kg",
        FINISHING_HEADING => "=== Finishing ===",
        MIN_CHARGE => "Minimum charge",
        SIZES_HEADING => "Available sizes",
        SIZES_EMPTY => "(none)",
        _ => return None,
    })
}

/// 재질 등급별 비중(kg/dm³) 테이블과 조회 함수를 제공한다.
/// 값은 공급사 가격표 기준이며 설계용 밀도로 사용하지 않는다.

/// 테이블에 없는 등급이 들어오면 사용하는 비중(304 기준).
pub const DEFAULT_DENSITY_KG_PER_DM3: f64 = 8.07;

#[derive(Debug)]
pub struct MaterialGrade {
    pub code: &'static str,
    pub notes: &'static str,
    /// kg/dm³ (= t/m³)
    pub density_kg_per_dm3: f64,
}

/// 등급 조회 결과. 폴백 여부를 함께 돌려준다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Density {
    pub kg_per_dm3: f64,
    /// true면 테이블에 없는 등급이라 기본 비중을 사용했음을 의미한다.
    pub fallback: bool,
}

pub fn grades() -> &'static [MaterialGrade] {
    GRADES
}

pub fn find_grade(code: &str) -> Option<&'static MaterialGrade> {
    let code = code.trim();
    GRADES.iter().find(|g| g.code.eq_ignore_ascii_case(code))
}

/// 등급 코드로 비중을 조회한다. 없으면 기본 비중으로 폴백한다.
pub fn density_for(code: &str) -> Density {
    match find_grade(code) {
        Some(g) => Density {
            kg_per_dm3: g.density_kg_per_dm3,
            fallback: false,
        },
        None => {
            tracing::warn!(grade = code, "unknown grade, using default density");
            Density {
                kg_per_dm3: DEFAULT_DENSITY_KG_PER_DM3,
                fallback: true,
            }
        }
    }
}

const GRADES: &[MaterialGrade] = &[
    grade("304", 8.07, "Austenitic 18/8"),
    grade("316", 8.07, "Austenitic Mo"),
    grade("430", 8.0, "Ferritic"),
    grade("409", 8.0, "Ferritic, exhaust grade"),
    grade("441", 8.0, "Ferritic Ti/Nb stabilised"),
    grade("3CR12", 8.0, "Utility ferritic"),
    grade("3CR12 3mm+", 8.2, "Utility ferritic, plate"),
    grade("4.5", 8.2, "4.5mm plate factor"),
    grade("Bennox", 8.3, ""),
    grade("4509", 7.9, "Ferritic Nb stabilised"),
    grade("Aluminium", 2.7, ""),
];

const fn grade(code: &'static str, density_kg_per_dm3: f64, notes: &'static str) -> MaterialGrade {
    MaterialGrade {
        code,
        notes,
        density_kg_per_dm3,
    }
}

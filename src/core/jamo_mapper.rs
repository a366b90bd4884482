//! 첫가끝 자모 <-> 호환용 자모 변환

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::tables::{
    HCJ_LEADS, HCJ_TAILS, HCJ_TO_JAMO_LEAD, HCJ_TO_JAMO_TAIL, HCJ_TO_JAMO_VOWEL, HCJ_VOWELS,
    JAMO_LEADS, JAMO_TAILS, JAMO_TO_HCJ, JAMO_VOWELS,
};
use crate::error::HangulError;

/// 음절 안에서 자모가 차지하는 자리
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    /// 초성
    Lead,
    /// 중성
    Vowel,
    /// 종성
    Tail,
}

impl Position {
    /// 문자열 이름 ("lead", "vowel", "tail")
    pub fn as_str(&self) -> &'static str {
        match self {
            Position::Lead => "lead",
            Position::Vowel => "vowel",
            Position::Tail => "tail",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Position {
    type Err = HangulError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lead" => Ok(Position::Lead),
            "vowel" => Ok(Position::Vowel),
            "tail" => Ok(Position::Tail),
            other => Err(HangulError::InvalidJamo(format!("알 수 없는 자모 위치: {:?}", other))),
        }
    }
}

/// 첫가끝 자모를 호환용 자모로 변환
/// 첫가끝 자모가 아닌 문자는 그대로 반환
pub fn jamo_to_hcj(c: char) -> char {
    JAMO_TO_HCJ.get(&c).copied().unwrap_or(c)
}

/// 호환용 자모를 주어진 자리의 첫가끝 자모로 변환
///
/// ```
/// use hangeul::{hcj_to_jamo, Position};
///
/// assert_eq!(hcj_to_jamo('ㄱ', Position::Lead).unwrap(), '\u{1100}');
/// assert_eq!(hcj_to_jamo('ㄱ', Position::Tail).unwrap(), '\u{11A8}');
/// assert!(hcj_to_jamo('ㄸ', Position::Tail).is_err());
/// ```
pub fn hcj_to_jamo(c: char, position: Position) -> Result<char, HangulError> {
    let table = match position {
        Position::Lead => &*HCJ_TO_JAMO_LEAD,
        Position::Vowel => &*HCJ_TO_JAMO_VOWEL,
        Position::Tail => &*HCJ_TO_JAMO_TAIL,
    };
    table.get(&c).copied().ok_or_else(|| {
        HangulError::InvalidJamo(format!("{:?}은(는) {} 자리에 올 수 없습니다", c, position))
    })
}

/// 자리와 인덱스로 자모 문자 반환
/// - use_jamo: true면 첫가끝 자모, false면 호환용 자모
/// - 종성 인덱스 0(종성 없음)과 범위 밖 인덱스는 None
pub fn slot_char(position: Position, index: u32, use_jamo: bool) -> Option<char> {
    let i = index as usize;
    match (position, use_jamo) {
        (Position::Lead, false) => HCJ_LEADS.get(i).copied(),
        (Position::Lead, true) => JAMO_LEADS.get(i).copied(),
        (Position::Vowel, false) => HCJ_VOWELS.get(i).copied(),
        (Position::Vowel, true) => JAMO_VOWELS.get(i).copied(),
        (Position::Tail, false) => HCJ_TAILS.get(i).copied().flatten(),
        (Position::Tail, true) => JAMO_TAILS.get(i).copied().flatten(),
    }
}

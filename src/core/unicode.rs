//! 유니코드 한글 음절 조합/분해
//!
//! 음절 인덱스 `code - 0xAC00`는 `(초성 * 21 + 중성) * 28 + 종성`으로 유일하게 분해됩니다.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::tables::{
    HCJ_LEADS, HCJ_TAILS, HCJ_VOWELS, LEAD_COUNT, LEAD_INDEX, SYLLABLE_BASE, SYLLABLE_LAST,
    TAIL_COUNT, TAIL_INDEX, VOWEL_COUNT, VOWEL_INDEX,
};
use crate::error::HangulError;

/// 음절 분해 결과 (호환용 자모)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Syllable {
    /// 초성
    pub lead: char,
    /// 중성
    pub vowel: char,
    /// 종성 (없으면 None)
    pub tail: Option<char>,
}

impl Syllable {
    /// 다시 완성형 음절로 조합
    pub fn to_char(&self) -> Result<char, HangulError> {
        compose_jamo(self.lead, self.vowel, self.tail)
    }
}

impl fmt::Display for Syllable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.lead, self.vowel)?;
        if let Some(tail) = self.tail {
            write!(f, "{}", tail)?;
        }
        Ok(())
    }
}

/// 초성/중성/종성 인덱스로 완성된 한글 유니코드 생성
/// - lead: 초성 인덱스 (0~18)
/// - vowel: 중성 인덱스 (0~20)
/// - tail: 종성 인덱스 (0~27, 0 = 종성 없음)
pub fn syllable_from_indices(lead: u32, vowel: u32, tail: u32) -> Option<char> {
    if lead >= LEAD_COUNT || vowel >= VOWEL_COUNT || tail >= TAIL_COUNT {
        return None;
    }
    let code = SYLLABLE_BASE + (lead * VOWEL_COUNT + vowel) * TAIL_COUNT + tail;
    char::from_u32(code)
}

/// 완성형 한글을 초성/중성/종성 인덱스로 분해
/// 반환: (초성 인덱스, 중성 인덱스, 종성 인덱스)
pub fn syllable_indices(c: char) -> Option<(u32, u32, u32)> {
    let code = c as u32;
    if !(SYLLABLE_BASE..=SYLLABLE_LAST).contains(&code) {
        return None;
    }
    let offset = code - SYLLABLE_BASE;
    let tail = offset % TAIL_COUNT;
    let vowel = (offset / TAIL_COUNT) % VOWEL_COUNT;
    let lead = offset / (VOWEL_COUNT * TAIL_COUNT);
    Some((lead, vowel, tail))
}

/// 한글 음절 한 글자를 호환용 자모 (초성, 중성, 종성)으로 분해
///
/// ```
/// use hangeul::decompose_syllable;
///
/// let s = decompose_syllable('한').unwrap();
/// assert_eq!((s.lead, s.vowel, s.tail), ('ㅎ', 'ㅏ', Some('ㄴ')));
/// assert!(decompose_syllable('ㄱ').is_err());
/// ```
pub fn decompose_syllable(c: char) -> Result<Syllable, HangulError> {
    let (lead, vowel, tail) = syllable_indices(c).ok_or(HangulError::InvalidSyllable(c))?;
    Ok(Syllable {
        lead: HCJ_LEADS[lead as usize],
        vowel: HCJ_VOWELS[vowel as usize],
        tail: HCJ_TAILS[tail as usize],
    })
}

/// 호환용 자모 초성 + 중성 (+ 종성)을 완성형 음절로 조합
pub fn compose_jamo(lead: char, vowel: char, tail: Option<char>) -> Result<char, HangulError> {
    let lead_index = *LEAD_INDEX
        .get(&lead)
        .ok_or_else(|| HangulError::InvalidJamo(format!("초성으로 쓸 수 없는 문자 {:?}", lead)))?;
    let vowel_index = *VOWEL_INDEX
        .get(&vowel)
        .ok_or_else(|| HangulError::InvalidJamo(format!("중성으로 쓸 수 없는 문자 {:?}", vowel)))?;
    let tail_index = match tail {
        Some(t) => *TAIL_INDEX
            .get(&t)
            .ok_or_else(|| HangulError::InvalidJamo(format!("종성으로 쓸 수 없는 문자 {:?}", t)))?,
        None => 0,
    };

    syllable_from_indices(lead_index, vowel_index, tail_index).ok_or_else(|| {
        HangulError::InvalidJamo(format!("{}{}{:?}", lead, vowel, tail))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syllable_from_indices() {
        // 가 = 초성 ㄱ(0) + 중성 ㅏ(0) + 종성 없음(0)
        assert_eq!(syllable_from_indices(0, 0, 0), Some('가'));
        // 각 = 초성 ㄱ(0) + 중성 ㅏ(0) + 종성 ㄱ(1)
        assert_eq!(syllable_from_indices(0, 0, 1), Some('각'));
        // 한 = 초성 ㅎ(18) + 중성 ㅏ(0) + 종성 ㄴ(4)
        assert_eq!(syllable_from_indices(18, 0, 4), Some('한'));
        assert_eq!(syllable_from_indices(18, 20, 27), Some('힣'));

        assert_eq!(syllable_from_indices(19, 0, 0), None);
        assert_eq!(syllable_from_indices(0, 21, 0), None);
        assert_eq!(syllable_from_indices(0, 0, 28), None);
    }

    #[test]
    fn test_syllable_indices() {
        assert_eq!(syllable_indices('가'), Some((0, 0, 0)));
        assert_eq!(syllable_indices('글'), Some((0, 18, 8)));
        assert_eq!(syllable_indices('힣'), Some((18, 20, 27)));

        // 한글이 아닌 문자
        assert_eq!(syllable_indices('a'), None);
        assert_eq!(syllable_indices('ㄱ'), None);
        assert_eq!(syllable_indices('\u{ABFF}'), None);
        assert_eq!(syllable_indices('\u{D7A4}'), None);
    }

    #[test]
    fn test_index_arithmetic_is_total() {
        for code in SYLLABLE_BASE..=SYLLABLE_LAST {
            let c = char::from_u32(code).unwrap();
            let (lead, vowel, tail) = syllable_indices(c).unwrap();
            assert!(lead < LEAD_COUNT && vowel < VOWEL_COUNT && tail < TAIL_COUNT);
            assert_eq!((lead * VOWEL_COUNT + vowel) * TAIL_COUNT + tail, code - SYLLABLE_BASE);
        }
    }

    #[test]
    fn test_decompose_boundaries() {
        let first = decompose_syllable('가').unwrap();
        assert_eq!(first, Syllable { lead: 'ㄱ', vowel: 'ㅏ', tail: None });

        let last = decompose_syllable('힣').unwrap();
        assert_eq!(last.lead, HCJ_LEADS[18]);
        assert_eq!(last.vowel, HCJ_VOWELS[20]);
        assert_eq!(last.tail, HCJ_TAILS[27]);
    }

    #[test]
    fn test_decompose_invalid() {
        assert_eq!(decompose_syllable('ㄱ'), Err(HangulError::InvalidSyllable('ㄱ')));
        assert_eq!(decompose_syllable('a'), Err(HangulError::InvalidSyllable('a')));
    }

    #[test]
    fn test_compose_jamo() {
        assert_eq!(compose_jamo('ㅎ', 'ㅏ', Some('ㄴ')), Ok('한'));
        assert_eq!(compose_jamo('ㄱ', 'ㅏ', None), Ok('가'));
        assert_eq!(compose_jamo('ㄷ', 'ㅏ', Some('ㄺ')), Ok('닭'));
    }

    #[test]
    fn test_compose_jamo_invalid() {
        // 초성/중성 자리 바뀜
        assert!(matches!(compose_jamo('ㅏ', 'ㄱ', None), Err(HangulError::InvalidJamo(_))));
        // ㄸ은 종성 불가
        assert!(matches!(compose_jamo('ㄱ', 'ㅏ', Some('ㄸ')), Err(HangulError::InvalidJamo(_))));
        // 첫가끝 자모는 받지 않음
        assert!(compose_jamo('\u{1100}', 'ㅏ', None).is_err());
    }

    #[test]
    fn test_roundtrip_all_syllables() {
        for code in SYLLABLE_BASE..=SYLLABLE_LAST {
            let c = char::from_u32(code).unwrap();
            let s = decompose_syllable(c).unwrap();
            assert_eq!(s.to_char(), Ok(c));
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(decompose_syllable('닭').unwrap().to_string(), "ㄷㅏㄺ");
        assert_eq!(decompose_syllable('가').unwrap().to_string(), "ㄱㅏ");
    }

    #[test]
    fn test_serialize() {
        let s = decompose_syllable('각').unwrap();
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(json, r#"{"lead":"ㄱ","vowel":"ㅏ","tail":"ㄱ"}"#);
        let parsed: Syllable = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, s);
    }
}

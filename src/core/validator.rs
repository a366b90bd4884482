//! 문자 분류 함수
//!
//! 모두 범위 검사나 테이블 조회만 하는 순수 함수입니다.

use crate::core::tables::{
    COMPOUND_TO_PARTS, HCJ_FIRST, HCJ_LAST, LEAD_INDEX, SYLLABLE_BASE, SYLLABLE_LAST, TAIL_INDEX,
    VOWEL_INDEX,
};

/// 첫가끝 초성 영역 (ᄀ ~ ᄒ)
const JAMO_LEAD_RANGE: std::ops::RangeInclusive<u32> = 0x1100..=0x1112;
/// 첫가끝 중성 영역 (ᅡ ~ ᅵ)
const JAMO_VOWEL_RANGE: std::ops::RangeInclusive<u32> = 0x1161..=0x1175;
/// 첫가끝 종성 영역 (ᆨ ~ ᇂ)
const JAMO_TAIL_RANGE: std::ops::RangeInclusive<u32> = 0x11A8..=0x11C2;

/// 완성형 한글 음절(가-힣)인지 확인
pub fn is_hangul_syllable(c: char) -> bool {
    (SYLLABLE_BASE..=SYLLABLE_LAST).contains(&(c as u32))
}

/// 현대 한글 첫가끝 자모(초성 U+1100~, 중성 U+1161~, 종성 U+11A8~)인지 확인
pub fn is_jamo(c: char) -> bool {
    is_jamo_lead_char(c) || is_jamo_vowel_char(c) || is_jamo_tail_char(c)
}

/// 첫가끝 초성인지 확인
pub(crate) fn is_jamo_lead_char(c: char) -> bool {
    JAMO_LEAD_RANGE.contains(&(c as u32))
}

/// 첫가끝 중성인지 확인
pub(crate) fn is_jamo_vowel_char(c: char) -> bool {
    JAMO_VOWEL_RANGE.contains(&(c as u32))
}

/// 첫가끝 종성인지 확인
pub(crate) fn is_jamo_tail_char(c: char) -> bool {
    JAMO_TAIL_RANGE.contains(&(c as u32))
}

/// 호환용 자모 영역(U+3131 ~ U+318E)의 문자인지 확인
pub fn is_hcj(c: char) -> bool {
    (HCJ_FIRST..=HCJ_LAST).contains(&(c as u32))
}

/// 초성으로 쓸 수 있는 호환용 자모인지 확인
pub fn is_jamo_lead(c: char) -> bool {
    LEAD_INDEX.contains_key(&c)
}

/// 중성으로 쓸 수 있는 호환용 자모인지 확인
pub fn is_jamo_vowel(c: char) -> bool {
    VOWEL_INDEX.contains_key(&c)
}

/// 종성으로 쓸 수 있는 호환용 자모인지 확인
pub fn is_jamo_tail(c: char) -> bool {
    TAIL_INDEX.contains_key(&c)
}

/// 복합 자모(쌍자음, 겹받침, 이중모음)인지 확인
pub fn is_jamo_compound(c: char) -> bool {
    COMPOUND_TO_PARTS.contains_key(&c)
}

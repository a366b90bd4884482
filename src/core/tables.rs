//! 한글 자모 정적 테이블
//!
//! 초성 19개, 중성 21개, 종성 28개(종성 없음 포함)의 순서 테이블과
//! 호환용 자모(HCJ, U+3131 ~ U+318E) / 첫가끝 자모(U+1100 ~ U+11C2) 사이의
//! 대응표, 복합 자모 분해표를 제공합니다.
//! 모든 테이블은 프로세스 전체에서 한 번만 초기화되고 이후 읽기 전용입니다.

use std::collections::HashMap;

use lazy_static::lazy_static;

/// 한글 음절 시작 코드포인트 (가)
pub const SYLLABLE_BASE: u32 = 0xAC00;
/// 한글 음절 마지막 코드포인트 (힣)
pub const SYLLABLE_LAST: u32 = 0xD7A3;

/// 초성 개수
pub const LEAD_COUNT: u32 = 19;
/// 중성 개수
pub const VOWEL_COUNT: u32 = 21;
/// 종성 개수 (종성 없음 포함)
pub const TAIL_COUNT: u32 = 28;
/// 전체 음절 개수
pub const SYLLABLE_COUNT: u32 = LEAD_COUNT * VOWEL_COUNT * TAIL_COUNT;

/// 첫가끝 초성 시작 (ᄀ)
pub const JAMO_LEAD_BASE: u32 = 0x1100;
/// 첫가끝 중성 시작 (ᅡ)
pub const JAMO_VOWEL_BASE: u32 = 0x1161;
/// 첫가끝 종성 기준점. 종성 인덱스 1(ᆨ)이 0x11A8
pub const JAMO_TAIL_BASE: u32 = 0x11A7;

/// 호환용 자모 영역 시작 (ㄱ)
pub const HCJ_FIRST: u32 = 0x3131;
/// 호환용 자모 영역 끝 (ㆎ)
pub const HCJ_LAST: u32 = 0x318E;

/// 초성 (호환용 자모, 인덱스 순)
pub const HCJ_LEADS: [char; 19] = [
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ', 'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ', 'ㅋ',
    'ㅌ', 'ㅍ', 'ㅎ',
];

/// 중성 (호환용 자모, 인덱스 순)
pub const HCJ_VOWELS: [char; 21] = [
    'ㅏ', 'ㅐ', 'ㅑ', 'ㅒ', 'ㅓ', 'ㅔ', 'ㅕ', 'ㅖ', 'ㅗ', 'ㅘ', 'ㅙ', 'ㅚ', 'ㅛ', 'ㅜ', 'ㅝ', 'ㅞ',
    'ㅟ', 'ㅠ', 'ㅡ', 'ㅢ', 'ㅣ',
];

/// 종성 (호환용 자모, 인덱스 순). 0번은 종성 없음
pub const HCJ_TAILS: [Option<char>; 28] = [
    None,
    Some('ㄱ'),
    Some('ㄲ'),
    Some('ㄳ'),
    Some('ㄴ'),
    Some('ㄵ'),
    Some('ㄶ'),
    Some('ㄷ'),
    Some('ㄹ'),
    Some('ㄺ'),
    Some('ㄻ'),
    Some('ㄼ'),
    Some('ㄽ'),
    Some('ㄾ'),
    Some('ㄿ'),
    Some('ㅀ'),
    Some('ㅁ'),
    Some('ㅂ'),
    Some('ㅄ'),
    Some('ㅅ'),
    Some('ㅆ'),
    Some('ㅇ'),
    Some('ㅈ'),
    Some('ㅊ'),
    Some('ㅋ'),
    Some('ㅌ'),
    Some('ㅍ'),
    Some('ㅎ'),
];

/// 초성 (첫가끝 자모 U+1100 ~ U+1112)
#[rustfmt::skip]
pub const JAMO_LEADS: [char; 19] = [
    '\u{1100}', '\u{1101}', '\u{1102}', '\u{1103}', '\u{1104}', '\u{1105}', '\u{1106}',
    '\u{1107}', '\u{1108}', '\u{1109}', '\u{110A}', '\u{110B}', '\u{110C}', '\u{110D}',
    '\u{110E}', '\u{110F}', '\u{1110}', '\u{1111}', '\u{1112}',
];

/// 중성 (첫가끝 자모 U+1161 ~ U+1175)
#[rustfmt::skip]
pub const JAMO_VOWELS: [char; 21] = [
    '\u{1161}', '\u{1162}', '\u{1163}', '\u{1164}', '\u{1165}', '\u{1166}', '\u{1167}',
    '\u{1168}', '\u{1169}', '\u{116A}', '\u{116B}', '\u{116C}', '\u{116D}', '\u{116E}',
    '\u{116F}', '\u{1170}', '\u{1171}', '\u{1172}', '\u{1173}', '\u{1174}', '\u{1175}',
];

/// 종성 (첫가끝 자모 U+11A8 ~ U+11C2). 0번은 종성 없음
#[rustfmt::skip]
pub const JAMO_TAILS: [Option<char>; 28] = [
    None,
    Some('\u{11A8}'), Some('\u{11A9}'), Some('\u{11AA}'), Some('\u{11AB}'), Some('\u{11AC}'),
    Some('\u{11AD}'), Some('\u{11AE}'), Some('\u{11AF}'), Some('\u{11B0}'), Some('\u{11B1}'),
    Some('\u{11B2}'), Some('\u{11B3}'), Some('\u{11B4}'), Some('\u{11B5}'), Some('\u{11B6}'),
    Some('\u{11B7}'), Some('\u{11B8}'), Some('\u{11B9}'), Some('\u{11BA}'), Some('\u{11BB}'),
    Some('\u{11BC}'), Some('\u{11BD}'), Some('\u{11BE}'), Some('\u{11BF}'), Some('\u{11C0}'),
    Some('\u{11C1}'), Some('\u{11C2}'),
];

/// 복합 자모 -> 구성 자모
///
/// 쌍자음 5개, 겹받침 11개, 이중모음 7개. 산술로 유도할 수 없으므로 직접 나열
pub const JAMO_COMPOUNDS: [(char, &[char]); 23] = [
    // 쌍자음
    ('ㄲ', &['ㄱ', 'ㄱ']),
    ('ㄸ', &['ㄷ', 'ㄷ']),
    ('ㅃ', &['ㅂ', 'ㅂ']),
    ('ㅆ', &['ㅅ', 'ㅅ']),
    ('ㅉ', &['ㅈ', 'ㅈ']),
    // 겹받침
    ('ㄳ', &['ㄱ', 'ㅅ']),
    ('ㄵ', &['ㄴ', 'ㅈ']),
    ('ㄶ', &['ㄴ', 'ㅎ']),
    ('ㄺ', &['ㄹ', 'ㄱ']),
    ('ㄻ', &['ㄹ', 'ㅁ']),
    ('ㄼ', &['ㄹ', 'ㅂ']),
    ('ㄽ', &['ㄹ', 'ㅅ']),
    ('ㄾ', &['ㄹ', 'ㅌ']),
    ('ㄿ', &['ㄹ', 'ㅍ']),
    ('ㅀ', &['ㄹ', 'ㅎ']),
    ('ㅄ', &['ㅂ', 'ㅅ']),
    // 이중모음
    ('ㅘ', &['ㅗ', 'ㅏ']),
    ('ㅙ', &['ㅗ', 'ㅐ']),
    ('ㅚ', &['ㅗ', 'ㅣ']),
    ('ㅝ', &['ㅜ', 'ㅓ']),
    ('ㅞ', &['ㅜ', 'ㅔ']),
    ('ㅟ', &['ㅜ', 'ㅣ']),
    ('ㅢ', &['ㅡ', 'ㅣ']),
];

lazy_static! {
    /// 호환용 초성 -> 초성 인덱스
    pub static ref LEAD_INDEX: HashMap<char, u32> = index_map(HCJ_LEADS.iter().copied());

    /// 호환용 중성 -> 중성 인덱스
    pub static ref VOWEL_INDEX: HashMap<char, u32> = index_map(HCJ_VOWELS.iter().copied());

    /// 호환용 종성 -> 종성 인덱스 (1 ~ 27)
    pub static ref TAIL_INDEX: HashMap<char, u32> = HCJ_TAILS
        .iter()
        .zip(0u32..)
        .filter_map(|(tail, i)| tail.map(|c| (c, i)))
        .collect();

    /// 첫가끝 자모 -> 호환용 자모 (역할은 코드포인트 영역으로 구분됨)
    pub static ref JAMO_TO_HCJ: HashMap<char, char> = {
        let mut map = HashMap::with_capacity(67);
        map.extend(JAMO_LEADS.iter().copied().zip(HCJ_LEADS.iter().copied()));
        map.extend(JAMO_VOWELS.iter().copied().zip(HCJ_VOWELS.iter().copied()));
        map.extend(
            JAMO_TAILS
                .iter()
                .zip(HCJ_TAILS.iter())
                .filter_map(|(jamo, hcj)| Some(((*jamo)?, (*hcj)?))),
        );
        map
    };

    /// 호환용 자모 -> 첫가끝 초성
    pub static ref HCJ_TO_JAMO_LEAD: HashMap<char, char> =
        HCJ_LEADS.iter().copied().zip(JAMO_LEADS.iter().copied()).collect();

    /// 호환용 자모 -> 첫가끝 중성
    pub static ref HCJ_TO_JAMO_VOWEL: HashMap<char, char> =
        HCJ_VOWELS.iter().copied().zip(JAMO_VOWELS.iter().copied()).collect();

    /// 호환용 자모 -> 첫가끝 종성
    pub static ref HCJ_TO_JAMO_TAIL: HashMap<char, char> = HCJ_TAILS
        .iter()
        .zip(JAMO_TAILS.iter())
        .filter_map(|(hcj, jamo)| Some(((*hcj)?, (*jamo)?)))
        .collect();

    /// 복합 자모 -> 구성 자모열
    pub static ref COMPOUND_TO_PARTS: HashMap<char, &'static [char]> =
        JAMO_COMPOUNDS.iter().copied().collect();

    /// 구성 자모열 -> 복합 자모 (COMPOUND_TO_PARTS의 역)
    pub static ref PARTS_TO_COMPOUND: HashMap<&'static [char], char> = {
        let mut map = HashMap::with_capacity(JAMO_COMPOUNDS.len());
        for &(compound, parts) in JAMO_COMPOUNDS.iter() {
            let previous = map.insert(parts, compound);
            assert!(
                previous.is_none(),
                "복합 자모 테이블 충돌: {:?} -> {:?}, {}",
                parts,
                previous,
                compound
            );
        }
        map
    };
}

fn index_map(symbols: impl Iterator<Item = char>) -> HashMap<char, u32> {
    symbols.zip(0u32..).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_sizes() {
        assert_eq!(SYLLABLE_COUNT, 11172);
        assert_eq!(SYLLABLE_BASE + SYLLABLE_COUNT - 1, SYLLABLE_LAST);
        assert_eq!(LEAD_INDEX.len(), 19);
        assert_eq!(VOWEL_INDEX.len(), 21);
        assert_eq!(TAIL_INDEX.len(), 27);
        assert_eq!(JAMO_TO_HCJ.len(), 19 + 21 + 27);
    }

    #[test]
    fn test_hcj_codepoints() {
        // 호환용 자모는 U+3131 ~ U+3163 안에 있어야 함
        for c in HCJ_LEADS.iter().chain(HCJ_VOWELS.iter()) {
            assert!((HCJ_FIRST..=0x3163).contains(&(*c as u32)), "{}", c);
        }
        assert_eq!(HCJ_LEADS[0] as u32, 0x3131);
        assert_eq!(HCJ_LEADS[18] as u32, 0x314E);
        assert_eq!(HCJ_VOWELS[0] as u32, 0x314F);
        assert_eq!(HCJ_VOWELS[20] as u32, 0x3163);
        assert_eq!(HCJ_TAILS[27], Some('ㅎ'));
    }

    #[test]
    fn test_jamo_codepoints_are_contiguous() {
        for (i, c) in JAMO_LEADS.iter().enumerate() {
            assert_eq!(*c as u32, JAMO_LEAD_BASE + i as u32);
        }
        for (i, c) in JAMO_VOWELS.iter().enumerate() {
            assert_eq!(*c as u32, JAMO_VOWEL_BASE + i as u32);
        }
        for (i, c) in JAMO_TAILS.iter().enumerate().skip(1) {
            assert_eq!(c.map(|c| c as u32), Some(JAMO_TAIL_BASE + i as u32));
        }
        assert_eq!(JAMO_TAILS[0], None);
    }

    #[test]
    fn test_compound_tables_are_inverse() {
        assert_eq!(COMPOUND_TO_PARTS.len(), JAMO_COMPOUNDS.len());
        assert_eq!(PARTS_TO_COMPOUND.len(), JAMO_COMPOUNDS.len());
        for (compound, parts) in COMPOUND_TO_PARTS.iter() {
            assert_eq!(PARTS_TO_COMPOUND.get(parts), Some(compound));
        }
    }

    #[test]
    fn test_compound_parts_are_hcj() {
        for (compound, parts) in JAMO_COMPOUNDS.iter() {
            assert!(parts.len() >= 2);
            let is_vowel = VOWEL_INDEX.contains_key(compound);
            for part in parts.iter() {
                // 모음 복합은 모음으로, 자음 복합은 자음으로만 구성
                assert_eq!(VOWEL_INDEX.contains_key(part), is_vowel, "{}", compound);
            }
        }
    }
}

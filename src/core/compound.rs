//! 복합 자모 (쌍자음, 겹받침, 이중모음) 분해/조합
//!
//! 복합 자모의 코드포인트 배치는 규칙적이지 않으므로 테이블 조회만 사용합니다.

use crate::core::tables::{COMPOUND_TO_PARTS, PARTS_TO_COMPOUND};
use crate::error::HangulError;

/// 복합 자모를 구성 자모열로 분해
///
/// ```
/// use hangeul::decompose_compound;
///
/// assert_eq!(decompose_compound('ㄲ').unwrap(), &['ㄱ', 'ㄱ']);
/// assert_eq!(decompose_compound('ㅘ').unwrap(), &['ㅗ', 'ㅏ']);
/// ```
pub fn decompose_compound(c: char) -> Result<&'static [char], HangulError> {
    COMPOUND_TO_PARTS
        .get(&c)
        .copied()
        .ok_or_else(|| HangulError::InvalidJamo(format!("복합 자모가 아닙니다: {:?}", c)))
}

/// 구성 자모열을 복합 자모로 조합
///
/// 순서까지 정확히 일치하는 경우만 조합합니다.
pub fn compose_compound(parts: &[char]) -> Result<char, HangulError> {
    PARTS_TO_COMPOUND
        .get(parts)
        .copied()
        .ok_or_else(|| HangulError::InvalidJamo(format!("복합 자모로 조합할 수 없습니다: {:?}", parts)))
}

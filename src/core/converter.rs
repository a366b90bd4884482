//! 텍스트 단위 분해/조합
//!
//! 한글 음절이 아닌 문자는 모두 그대로 통과하므로 텍스트 단위 함수는 실패하지 않습니다.

use std::iter::FusedIterator;
use std::str::Chars;

use crate::core::hangul_fsm::HangulFsm;
use crate::core::jamo_mapper::{slot_char, Position};
use crate::core::unicode::syllable_indices;

/// 텍스트의 한글 음절을 자모로 분해
/// - use_jamo: false면 호환용 자모(ㄱ, ㅏ), true면 첫가끝 자모(U+1100 ~)
///
/// 이미 분해된 자모나 복합 자모(ㄲ, ㅘ)는 더 분해하지 않습니다.
pub fn decompose(text: &str, use_jamo: bool) -> String {
    let mut output = String::with_capacity(text.len() * 3);
    output.extend(iter_decompose(text, use_jamo));
    log::trace!("decompose: {} bytes -> {} bytes", text.len(), output.len());
    output
}

/// 호환용 자모로 분해
pub fn decompose_hcj(text: &str) -> String {
    decompose(text, false)
}

/// 첫가끝 자모로 분해
pub fn decompose_jamo(text: &str) -> String {
    decompose(text, true)
}

/// 분해 결과를 한 글자씩 지연 생성하는 반복자 반환
pub fn iter_decompose(text: &str, use_jamo: bool) -> Decompose<'_> {
    Decompose {
        chars: text.chars(),
        use_jamo,
        pending: [None, None],
    }
}

/// 자모열을 완성형 음절로 조합
///
/// 호환용 자모열과 첫가끝 자모열을 모두 조합합니다.
/// 조합되지 않는 자모와 그 밖의 문자는 그대로 출력합니다.
pub fn compose(text: &str) -> String {
    let mut fsm = HangulFsm::with_capacity(text.len());

    for c in text.chars() {
        fsm.feed(c);
    }

    let output = fsm.finish();
    log::trace!("compose: {} bytes -> {} bytes", text.len(), output.len());
    output
}

/// `compose`와 동일
pub fn compose_hcj(text: &str) -> String {
    compose(text)
}

/// `iter_decompose`가 반환하는 반복자
///
/// 원문 문자 반복자 외에 아직 내보내지 않은 중성/종성 두 글자만 보관합니다.
#[derive(Debug, Clone)]
pub struct Decompose<'a> {
    chars: Chars<'a>,
    use_jamo: bool,
    /// 다음에 내보낼 중성, 종성
    pending: [Option<char>; 2],
}

impl Decompose<'_> {
    fn pending_len(&self) -> usize {
        self.pending.iter().filter(|c| c.is_some()).count()
    }
}

impl Iterator for Decompose<'_> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        if let Some(c) = self.pending[0].take() {
            self.pending[0] = self.pending[1].take();
            return Some(c);
        }

        let c = self.chars.next()?;
        match syllable_indices(c) {
            Some((lead, vowel, tail)) => {
                self.pending = [
                    slot_char(Position::Vowel, vowel, self.use_jamo),
                    slot_char(Position::Tail, tail, self.use_jamo),
                ];
                // 인덱스가 범위 안이므로 항상 Some
                Some(slot_char(Position::Lead, lead, self.use_jamo).unwrap_or(c))
            }
            None => Some(c),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let pending = self.pending_len();
        let (lower, upper) = self.chars.size_hint();
        (
            lower.saturating_add(pending),
            upper.and_then(|u| u.checked_mul(3)).and_then(|u| u.checked_add(pending)),
        )
    }
}

impl FusedIterator for Decompose<'_> {}

//! 자모열 -> 음절 조합 유한 상태 기계 (FSM)
//!
//! 호환용 자모는 자리 구분이 없으므로 종성 후보를 바로 붙이지 않고 한 글자 더 봅니다.
//! 다음 글자가 모음이면 종성 후보는 다음 음절의 초성이 됩니다.
//! 첫가끝 자모는 코드포인트가 자리를 말해주므로 종성이 오면 바로 확정합니다.

use crate::core::tables::{
    JAMO_LEAD_BASE, JAMO_TAIL_BASE, JAMO_VOWEL_BASE, LEAD_INDEX, TAIL_INDEX, VOWEL_INDEX,
};
use crate::core::unicode::syllable_from_indices;
use crate::core::validator::{is_hcj, is_jamo_lead_char, is_jamo_tail_char, is_jamo_vowel_char};

/// 자모 표기 방식
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Form {
    /// 호환용 자모 (U+3131 ~)
    Hcj,
    /// 첫가끝 자모 (U+1100 ~)
    Jamo,
}

/// 조합 후보 자모 한 글자와 자리별 인덱스
#[derive(Debug, Clone, Copy)]
struct Piece {
    ch: char,
    form: Form,
    lead: Option<u32>,
    vowel: Option<u32>,
    tail: Option<u32>,
}

impl Piece {
    /// 자모가 아니거나 어느 자리에도 올 수 없으면 None
    fn classify(c: char) -> Option<Piece> {
        let code = c as u32;
        let piece = if is_hcj(c) {
            Piece {
                ch: c,
                form: Form::Hcj,
                lead: LEAD_INDEX.get(&c).copied(),
                vowel: VOWEL_INDEX.get(&c).copied(),
                tail: TAIL_INDEX.get(&c).copied(),
            }
        } else if is_jamo_lead_char(c) {
            Piece::jamo(c, Some(code - JAMO_LEAD_BASE), None, None)
        } else if is_jamo_vowel_char(c) {
            Piece::jamo(c, None, Some(code - JAMO_VOWEL_BASE), None)
        } else if is_jamo_tail_char(c) {
            Piece::jamo(c, None, None, Some(code - JAMO_TAIL_BASE))
        } else {
            return None;
        };

        if piece.lead.is_none() && piece.vowel.is_none() && piece.tail.is_none() {
            // 옛한글 호환용 자모 등
            return None;
        }
        Some(piece)
    }

    fn jamo(ch: char, lead: Option<u32>, vowel: Option<u32>, tail: Option<u32>) -> Piece {
        Piece {
            ch,
            form: Form::Jamo,
            lead,
            vowel,
            tail,
        }
    }
}

/// FSM 상태
#[derive(Debug, Clone, Copy)]
enum State {
    /// 아무것도 없음
    Empty,
    /// 초성만 입력됨
    Lead(Piece),
    /// 초성+중성
    LeadVowel(Piece, Piece),
    /// 초성+중성+종성 후보 (호환용 자모만, 다음 글자를 봐야 확정)
    LeadVowelTail(Piece, Piece, Piece),
}

/// 한글 조합 FSM
///
/// 글자 단위로 `feed`하고 `finish`로 결과를 받습니다.
/// 상태는 최대 자모 세 글자만 보관합니다.
pub struct HangulFsm {
    state: State,
    /// 출력 버퍼
    output: String,
}

impl HangulFsm {
    /// 새 FSM 생성
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// 출력 버퍼 용량을 지정하여 생성
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            state: State::Empty,
            output: String::with_capacity(capacity),
        }
    }

    /// 문자 하나를 입력하여 상태 전이
    pub fn feed(&mut self, c: char) {
        match Piece::classify(c) {
            Some(piece) => self.feed_piece(piece),
            None => self.feed_passthrough(c),
        }
    }

    /// 자모 입력 처리
    fn feed_piece(&mut self, piece: Piece) {
        let state = std::mem::replace(&mut self.state, State::Empty);
        self.state = match state {
            State::Empty => self.start(piece),
            State::Lead(lead) => {
                if piece.form == lead.form && piece.vowel.is_some() {
                    State::LeadVowel(lead, piece)
                } else {
                    // 모음이 오지 않은 초성은 낱자로 출력
                    self.output.push(lead.ch);
                    self.start(piece)
                }
            }
            State::LeadVowel(lead, vowel) => {
                if piece.form == lead.form && piece.tail.is_some() {
                    match piece.form {
                        Form::Hcj => State::LeadVowelTail(lead, vowel, piece),
                        Form::Jamo => {
                            self.flush_syllable(lead, vowel, Some(piece));
                            State::Empty
                        }
                    }
                } else {
                    self.flush_syllable(lead, vowel, None);
                    self.start(piece)
                }
            }
            State::LeadVowelTail(lead, vowel, tail) => {
                if piece.form == tail.form && piece.vowel.is_some() {
                    // 종성 후보를 다음 글자의 초성으로 넘김
                    self.flush_syllable(lead, vowel, None);
                    self.state = self.start(tail);
                    self.feed_piece(piece);
                    return;
                }
                self.flush_syllable(lead, vowel, Some(tail));
                self.start(piece)
            }
        };
    }

    /// 빈 상태에서 자모 입력: 초성이 될 수 있으면 보관, 아니면 그대로 출력
    fn start(&mut self, piece: Piece) -> State {
        if piece.lead.is_some() {
            State::Lead(piece)
        } else {
            self.output.push(piece.ch);
            State::Empty
        }
    }

    /// 초성+중성(+종성)을 음절로 출력
    fn flush_syllable(&mut self, lead: Piece, vowel: Piece, tail: Option<Piece>) {
        let tail_index = match tail {
            Some(t) => t.tail,
            None => Some(0),
        };
        let composed = match (lead.lead, vowel.vowel, tail_index) {
            (Some(l), Some(v), Some(t)) => syllable_from_indices(l, v, t),
            _ => None,
        };

        match composed {
            Some(c) => self.output.push(c),
            None => {
                // 상태 전이상 도달하지 않지만, 입력을 잃지 않도록 그대로 출력
                log::debug!("음절 조합 실패: {:?} {:?} {:?}", lead.ch, vowel.ch, tail.map(|t| t.ch));
                self.output.push(lead.ch);
                self.output.push(vowel.ch);
                if let Some(t) = tail {
                    self.output.push(t.ch);
                }
            }
        }
    }

    /// 현재 조합 중인 글자를 출력 버퍼에 추가
    fn flush_current(&mut self) {
        match std::mem::replace(&mut self.state, State::Empty) {
            State::Empty => {}
            State::Lead(lead) => self.output.push(lead.ch),
            State::LeadVowel(lead, vowel) => self.flush_syllable(lead, vowel, None),
            State::LeadVowelTail(lead, vowel, tail) => {
                self.flush_syllable(lead, vowel, Some(tail))
            }
        }
    }

    /// 자모가 아닌 문자 처리 (숫자, 영문, 완성형 음절 등)
    pub fn feed_passthrough(&mut self, c: char) {
        self.flush_current();
        self.output.push(c);
    }

    /// FSM 종료 및 최종 결과 반환
    pub fn finish(mut self) -> String {
        self.flush_current();
        self.output
    }
}

impl Default for HangulFsm {
    fn default() -> Self {
        Self::new()
    }
}

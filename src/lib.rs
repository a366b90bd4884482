//! 한글 음절과 자모 사이의 분해/조합
//!
//! ```
//! use hangeul::{compose, decompose};
//!
//! assert_eq!(decompose("안녕", false), "ㅇㅏㄴㄴㅕㅇ");
//! assert_eq!(compose("ㅎㅏㄴㄱㅡㄹ"), "한글");
//! assert_eq!(compose(&decompose("대한민국", true)), "대한민국");
//! ```

pub mod config;
pub mod core;
pub mod error;

pub use crate::core::compound::{compose_compound, decompose_compound};
pub use crate::core::converter::{
    compose, compose_hcj, decompose, decompose_hcj, decompose_jamo, iter_decompose, Decompose,
};
pub use crate::core::jamo_mapper::{hcj_to_jamo, jamo_to_hcj, Position};
pub use crate::core::tables::{
    HCJ_LEADS, HCJ_TAILS, HCJ_VOWELS, JAMO_COMPOUNDS, JAMO_LEADS, JAMO_TAILS, JAMO_VOWELS,
};
pub use crate::core::unicode::{compose_jamo, decompose_syllable, Syllable};
pub use crate::core::validator::{
    is_hangul_syllable, is_hcj, is_jamo, is_jamo_compound, is_jamo_lead, is_jamo_tail,
    is_jamo_vowel,
};
pub use crate::error::HangulError;

//! 한글 음절 <-> 자모 변환 핵심 모듈

pub mod compound;
pub mod converter;
pub mod hangul_fsm;
pub mod jamo_mapper;
pub mod tables;
pub mod unicode;
pub mod validator;

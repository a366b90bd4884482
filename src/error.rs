//! 에러 타입

use thiserror::Error;

/// 음절/자모 변환 에러
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HangulError {
    /// 한글 음절(U+AC00 ~ U+D7A3)이 아닌 문자
    #[error("한글 음절이 아닙니다: {0:?}")]
    InvalidSyllable(char),
    /// 초성/중성/종성/복합 자모로 쓸 수 없는 문자, 또는 조합할 수 없는 자모열
    #[error("유효하지 않은 자모: {0}")]
    InvalidJamo(String),
}

/// 설정 파일 로드/저장 에러
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 파일 읽기/쓰기 실패
    #[error("설정 파일 입출력 실패: {0}")]
    Io(#[from] std::io::Error),
    /// JSON 직렬화/파싱 실패
    #[error("설정 JSON 처리 실패: {0}")]
    Json(#[from] serde_json::Error),
}

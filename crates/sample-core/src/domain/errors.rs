//! Errors - デコードエラーと分類

use thiserror::Error;

use super::sample_type::SampleType;

/// DecodeErrorKind はデコード失敗の分類
///
/// `DecodeError` は serde_json::Error を抱えるため比較できません。
/// テストや呼び出し側の分岐にはこちらを使います。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeErrorKind {
    MalformedInput,
    MissingBody,
    InvalidDiscriminant,
    PayloadDecode,
}

/// DecodeError は envelope / group のデコードエラー
///
/// 最初に見つかった失敗だけを返します（部分的な結果は返さない）。
#[derive(Debug, Error)]
pub enum DecodeError {
    /// オブジェクトでない、またはフィールドの型が違う
    #[error("malformed input: {0}")]
    MalformedInput(String),

    #[error("missing body")]
    MissingBody,

    #[error("invalid type: {0}")]
    InvalidDiscriminant(String),

    /// body の `value` が無い、または文字列でない
    #[error("payload decode error for type {sample_type}: {source}")]
    PayloadDecode {
        sample_type: SampleType,
        #[source]
        source: serde_json::Error,
    },
}

impl DecodeError {
    pub fn kind(&self) -> DecodeErrorKind {
        match self {
            DecodeError::MalformedInput(_) => DecodeErrorKind::MalformedInput,
            DecodeError::MissingBody => DecodeErrorKind::MissingBody,
            DecodeError::InvalidDiscriminant(_) => DecodeErrorKind::InvalidDiscriminant,
            DecodeError::PayloadDecode { .. } => DecodeErrorKind::PayloadDecode,
        }
    }

    pub(crate) fn malformed(detail: impl Into<String>) -> Self {
        DecodeError::MalformedInput(detail.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failed_check() {
        assert_eq!(DecodeError::MissingBody.to_string(), "missing body");
        assert_eq!(
            DecodeError::InvalidDiscriminant("four".into()).to_string(),
            "invalid type: four"
        );
        assert_eq!(
            DecodeError::malformed("expected an object, found a string").to_string(),
            "malformed input: expected an object, found a string"
        );
    }

    #[test]
    fn payload_error_keeps_serde_source() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = DecodeError::PayloadDecode {
            sample_type: SampleType::Two,
            source,
        };
        assert_eq!(err.kind(), DecodeErrorKind::PayloadDecode);
        assert!(err.to_string().starts_with("payload decode error for type two: "));
        assert!(std::error::Error::source(&err).is_some());
    }
}

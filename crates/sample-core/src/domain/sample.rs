//! Sample - 判別子と解決済み body の組（envelope）
//!
//! # 学習ポイント
//! - 閉じた variant 集合は enum（sum type）で表す
//! - 判別子は payload の variant から導出するので、食い違った組は作れない
//! - `&dyn SampleBody` で variant を意識せずに値を読む

use serde::Serialize;

use super::body::{SampleBody, SampleBodyOne, SampleBodyThree, SampleBodyTwo};
use super::sample_type::SampleType;

/// SamplePayload は解決済みの body
///
/// シリアライズ時は中身の body だけを書き出します（タグは `Sample` 側）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SamplePayload {
    One(SampleBodyOne),
    Two(SampleBodyTwo),
    Three(SampleBodyThree),
}

impl SamplePayload {
    pub fn sample_type(&self) -> SampleType {
        match self {
            SamplePayload::One(_) => SampleType::One,
            SamplePayload::Two(_) => SampleType::Two,
            SamplePayload::Three(_) => SampleType::Three,
        }
    }

    pub fn as_body(&self) -> &dyn SampleBody {
        match self {
            SamplePayload::One(body) => body,
            SamplePayload::Two(body) => body,
            SamplePayload::Three(body) => body,
        }
    }
}

impl SampleBody for SamplePayload {
    fn value(&self) -> &str {
        self.as_body().value()
    }
}

impl From<SampleBodyOne> for SamplePayload {
    fn from(body: SampleBodyOne) -> Self {
        SamplePayload::One(body)
    }
}

impl From<SampleBodyTwo> for SamplePayload {
    fn from(body: SampleBodyTwo) -> Self {
        SamplePayload::Two(body)
    }
}

impl From<SampleBodyThree> for SamplePayload {
    fn from(body: SampleBodyThree) -> Self {
        SamplePayload::Three(body)
    }
}

/// Sample は 1 件の tagged record
///
/// デコード（`typed::codec`）でのみ組み立てられ、以後は読み取り専用です。
///
/// # 使用例
/// ```ignore
/// let sample = Sample::from_slice(br#"{"type":"one","body":{"value":"v"}}"#)?;
/// assert_eq!(sample.sample_type(), SampleType::One);
/// assert_eq!(sample.value(), "v");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample {
    payload: SamplePayload,
}

impl Sample {
    pub fn new(payload: impl Into<SamplePayload>) -> Self {
        Self {
            payload: payload.into(),
        }
    }

    pub fn sample_type(&self) -> SampleType {
        self.payload.sample_type()
    }

    pub fn payload(&self) -> &SamplePayload {
        &self.payload
    }

    pub fn body(&self) -> &dyn SampleBody {
        self.payload.as_body()
    }

    pub fn value(&self) -> &str {
        self.payload.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_type_follows_payload_variant() {
        assert_eq!(Sample::new(SampleBodyOne::new("x")).sample_type(), SampleType::One);
        assert_eq!(Sample::new(SampleBodyTwo::new("x")).sample_type(), SampleType::Two);
        assert_eq!(Sample::new(SampleBodyThree::new("x")).sample_type(), SampleType::Three);
    }

    #[test]
    fn body_exposes_value_through_trait_object() {
        let sample = Sample::new(SampleBodyTwo::new("hello"));
        let body: &dyn SampleBody = sample.body();
        assert_eq!(body.value(), "hello");
        assert_eq!(sample.value(), "hello");
    }

    #[test]
    fn same_value_different_variant_is_not_equal() {
        let a = Sample::new(SampleBodyOne::new("same"));
        let b = Sample::new(SampleBodyTwo::new("same"));
        assert_ne!(a, b);
    }

    #[test]
    fn payload_serializes_without_tag() {
        let payload = SamplePayload::from(SampleBodyThree::new("v"));
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json, serde_json::json!({ "value": "v" }));
    }
}

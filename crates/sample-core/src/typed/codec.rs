//! Codec - JSON と Sample / SampleGroup の相互変換
//!
//! # デコードフロー（envelope）
//! 1. オブジェクトであることを確認（違えば `MalformedInput`）
//! 2. `body` を取り出す（無ければ `MissingBody`、他のどのチェックより先）
//! 3. 残りのフィールドを `SampleHeader` にデコードして `type` を得る
//! 4. `type` で分岐して body を対応する型にデコード
//!
//! # 学習ポイント
//! - 手順 3 は derive しただけの別の型に任せるので、
//!   `Sample` の `Deserialize` 実装が自分自身を呼び直すことはない
//! - 分岐は `SampleType` の網羅的な match（variant 追加時はコンパイルエラーになる）

use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::str::FromStr;

use super::payload::decode_body;
use crate::domain::{
    DecodeError, Sample, SampleBodyOne, SampleBodyThree, SampleBodyTwo, SampleGroup,
    SamplePayload, SampleType,
};

/// `body` を除いた envelope の基本フィールド
///
/// `type` が無い、または `null` の場合は空文字列として扱い、
/// 分岐で `InvalidDiscriminant` になります。
#[derive(Debug, Deserialize)]
struct SampleHeader {
    #[serde(rename = "type", default)]
    sample_type: Option<String>,
}

/// エンコード用の envelope 形
#[derive(Serialize)]
struct SampleWire<'a> {
    #[serde(rename = "type")]
    sample_type: SampleType,
    body: &'a SamplePayload,
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn expect_object(raw: Value) -> Result<Map<String, Value>, DecodeError> {
    match raw {
        Value::Object(fields) => Ok(fields),
        other => Err(DecodeError::malformed(format!(
            "expected an object, found {}",
            describe(&other)
        ))),
    }
}

fn parse_value(bytes: &[u8]) -> Result<Value, DecodeError> {
    serde_json::from_slice(bytes).map_err(|e| DecodeError::malformed(e.to_string()))
}

/// 1 件の envelope をデコードする
pub fn decode_sample(raw: Value) -> Result<Sample, DecodeError> {
    let mut fields = expect_object(raw)?;

    let raw_body = fields.remove("body").ok_or(DecodeError::MissingBody)?;

    let header: SampleHeader = serde_json::from_value(Value::Object(fields))
        .map_err(|e| DecodeError::malformed(format!("field `type`: {e}")))?;
    let sample_type: SampleType = header.sample_type.unwrap_or_default().parse()?;

    let payload: SamplePayload = match sample_type {
        SampleType::One => decode_body::<SampleBodyOne>(raw_body)?.into(),
        SampleType::Two => decode_body::<SampleBodyTwo>(raw_body)?.into(),
        SampleType::Three => decode_body::<SampleBodyThree>(raw_body)?.into(),
    };

    tracing::debug!(sample_type = %sample_type, "decoded sample");
    Ok(Sample::new(payload))
}

/// `{ "id": ..., "samples": { ... } }` をデコードする
///
/// 最初に失敗したエントリのエラーをそのまま返します。
pub fn decode_group(raw: Value) -> Result<SampleGroup, DecodeError> {
    let mut fields = expect_object(raw)?;

    let id = match fields.remove("id") {
        Some(Value::String(id)) => id,
        Some(other) => {
            return Err(DecodeError::malformed(format!(
                "field `id` must be a string, found {}",
                describe(&other)
            )));
        }
        None => return Err(DecodeError::malformed("missing field `id`")),
    };

    let raw_samples = match fields.remove("samples") {
        Some(Value::Object(samples)) => samples,
        Some(other) => {
            return Err(DecodeError::malformed(format!(
                "field `samples` must be an object, found {}",
                describe(&other)
            )));
        }
        None => return Err(DecodeError::malformed("missing field `samples`")),
    };

    let mut samples = HashMap::with_capacity(raw_samples.len());
    for (key, raw) in raw_samples {
        let sample = decode_sample(raw).inspect_err(|err| {
            tracing::warn!(group = %id, key = %key, error = %err, "failed to decode sample");
        })?;
        samples.insert(key, sample);
    }

    tracing::debug!(group = %id, samples = samples.len(), "decoded sample group");
    Ok(SampleGroup::new(id, samples))
}

impl Sample {
    pub fn from_value(raw: Value) -> Result<Self, DecodeError> {
        decode_sample(raw)
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self, DecodeError> {
        decode_sample(parse_value(bytes)?)
    }
}

impl FromStr for Sample {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Sample::from_slice(s.as_bytes())
    }
}

impl SampleGroup {
    pub fn from_value(raw: Value) -> Result<Self, DecodeError> {
        decode_group(raw)
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self, DecodeError> {
        decode_group(parse_value(bytes)?)
    }
}

impl FromStr for SampleGroup {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SampleGroup::from_slice(s.as_bytes())
    }
}

impl<'de> Deserialize<'de> for Sample {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Value::deserialize(deserializer)?;
        decode_sample(raw).map_err(de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for SampleGroup {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Value::deserialize(deserializer)?;
        decode_group(raw).map_err(de::Error::custom)
    }
}

impl Serialize for Sample {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        SampleWire {
            sample_type: self.sample_type(),
            body: self.payload(),
        }
        .serialize(serializer)
    }
}

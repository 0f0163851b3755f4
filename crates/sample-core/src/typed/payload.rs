//! TypedBody - body 型と判別子をコンパイル時に対応付ける
//!
//! # 学習ポイント
//! - Associated Constants (`const TYPE`)
//! - `DeserializeOwned` を持つ trait は object-safe ではない
//!   → 読み取りは `SampleBody`（dyn）、デコードは `TypedBody`（generic）の二層

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::domain::{
    DecodeError, SampleBody, SampleBodyOne, SampleBodyThree, SampleBodyTwo, SamplePayload,
    SampleType,
};

/// TypedBody は判別子で選ばれる body 型
///
/// # Trait Bounds
/// - `SampleBody`: デコード後は共通の capability で読むため
/// - `DeserializeOwned`: `serde_json::Value` から復元するため
/// - `Into<SamplePayload>`: 閉じた sum type に格納するため
pub trait TypedBody: SampleBody + DeserializeOwned + Into<SamplePayload> + 'static {
    const TYPE: SampleType;
}

impl TypedBody for SampleBodyOne {
    const TYPE: SampleType = SampleType::One;
}

impl TypedBody for SampleBodyTwo {
    const TYPE: SampleType = SampleType::Two;
}

impl TypedBody for SampleBodyThree {
    const TYPE: SampleType = SampleType::Three;
}

/// raw body を `B` としてデコードする
///
/// 失敗は `B::TYPE` 付きの `DecodeError::PayloadDecode` になります。
pub fn decode_body<B: TypedBody>(raw: Value) -> Result<B, DecodeError> {
    serde_json::from_value(raw).map_err(|source| DecodeError::PayloadDecode {
        sample_type: B::TYPE,
        source,
    })
}

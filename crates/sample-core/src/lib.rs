//! sample-core
//!
//! Decoding of tagged samples: `{ "type": ..., "body": ... }` envelopes whose
//! body shape is chosen by `type`, plus the `{ "id", "samples" }` group that
//! holds them.
//!
//! # モジュール構成
//! - **domain**: データモデル（sample_type, body, sample, group, errors）
//! - **typed**: デコード（TypedBody, codec）

pub mod domain;
pub mod typed;

pub use domain::{
    DecodeError, DecodeErrorKind, Sample, SampleBody, SampleBodyOne, SampleBodyThree,
    SampleBodyTwo, SampleGroup, SamplePayload, SampleType,
};
pub use typed::{TypedBody, decode_body, decode_group, decode_sample};

//! Typed - 判別子による body のデコード
//!
//! # 二層構造
//! - **デコード（Typed）**: `TypedBody` trait - `const TYPE` で判別子と型を対応付け
//! - **読み取り（Dyn）**: `SampleBody` trait - object-safe, variant を意識しない

pub mod codec;
pub mod payload;

pub use self::codec::{decode_group, decode_sample};
pub use self::payload::{TypedBody, decode_body};

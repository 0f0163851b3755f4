//! SampleType - envelope の判別子（discriminant）
//!
//! `type` フィールドに入るラベルの閉じた集合です。
//! 未知のラベルは `DecodeError::InvalidDiscriminant` になります。

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use super::errors::DecodeError;

/// SampleType は body の形を決める判別子
///
/// # ラベル
/// - `"one"`   → `SampleBodyOne`
/// - `"two"`   → `SampleBodyTwo`
/// - `"three"` → `SampleBodyThree`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SampleType {
    One,
    Two,
    Three,
}

impl SampleType {
    /// 既知の判別子すべて（ラベルの解決に使う）
    pub const ALL: [SampleType; 3] = [SampleType::One, SampleType::Two, SampleType::Three];

    pub fn as_str(&self) -> &'static str {
        match self {
            SampleType::One => "one",
            SampleType::Two => "two",
            SampleType::Three => "three",
        }
    }
}

impl fmt::Display for SampleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SampleType {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SampleType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| DecodeError::InvalidDiscriminant(s.to_string()))
    }
}

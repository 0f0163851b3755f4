//! Payload variants and the shared `SampleBody` capability.
//!
//! The three bodies have the same shape today. They stay separate types so
//! that the discriminant alone decides which one is built.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Read access shared by every payload variant.
///
/// Object-safe: callers hold `&dyn SampleBody` without knowing the variant.
pub trait SampleBody: fmt::Debug + Send + Sync {
    /// The stored value, verbatim.
    fn value(&self) -> &str;
}

/// Body selected by `"type": "one"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleBodyOne {
    value: String,
}

impl SampleBodyOne {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

impl SampleBody for SampleBodyOne {
    fn value(&self) -> &str {
        &self.value
    }
}

/// Body selected by `"type": "two"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleBodyTwo {
    value: String,
}

impl SampleBodyTwo {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

impl SampleBody for SampleBodyTwo {
    fn value(&self) -> &str {
        &self.value
    }
}

/// Body selected by `"type": "three"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleBodyThree {
    value: String,
}

impl SampleBodyThree {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

impl SampleBody for SampleBodyThree {
    fn value(&self) -> &str {
        &self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn bodies_are_read_uniformly() {
        let bodies: Vec<Box<dyn SampleBody>> = vec![
            Box::new(SampleBodyOne::new("a")),
            Box::new(SampleBodyTwo::new("b")),
            Box::new(SampleBodyThree::new("c")),
        ];
        let values: Vec<&str> = bodies.iter().map(|b| b.value()).collect();
        assert_eq!(values, vec!["a", "b", "c"]);
    }

    #[test]
    fn value_is_returned_verbatim() {
        let body: SampleBodyTwo =
            serde_json::from_value(json!({ "value": "  Mixed Case\t" })).unwrap();
        assert_eq!(body.value(), "  Mixed Case\t");
    }

    #[test]
    fn unknown_body_fields_are_ignored() {
        let body: SampleBodyThree =
            serde_json::from_value(json!({ "value": "v", "extra": 1 })).unwrap();
        assert_eq!(body, SampleBodyThree::new("v"));
    }
}

//! SampleGroup: an `id` plus samples keyed by arbitrary strings.

use serde::Serialize;
use std::collections::HashMap;

use super::sample::Sample;

/// Decoded collection of samples.
///
/// Built all-or-nothing by `typed::codec::decode_group`; there is no
/// partially decoded group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SampleGroup {
    id: String,
    samples: HashMap<String, Sample>,
}

impl SampleGroup {
    pub fn new(id: impl Into<String>, samples: HashMap<String, Sample>) -> Self {
        Self {
            id: id.into(),
            samples,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn samples(&self) -> &HashMap<String, Sample> {
        &self.samples
    }

    pub fn get(&self, key: &str) -> Option<&Sample> {
        self.samples.get(key)
    }

    /// Values of every sample, in unspecified order.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.samples.values().map(Sample::value)
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

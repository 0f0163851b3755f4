//! Domain model (discriminant, bodies, envelopes, groups, errors).

pub mod body;
pub mod errors;
pub mod group;
pub mod sample;
pub mod sample_type;

pub use body::{SampleBody, SampleBodyOne, SampleBodyThree, SampleBodyTwo};
pub use errors::{DecodeError, DecodeErrorKind};
pub use group::SampleGroup;
pub use sample::{Sample, SamplePayload};
pub use sample_type::SampleType;

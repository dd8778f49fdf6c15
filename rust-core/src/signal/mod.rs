//! Signal input: validation and loading

pub mod buffer;
pub mod csv;

pub use buffer::SampleBuffer;
pub use csv::parse_samples;

pub mod counter;
pub mod error;
pub mod generator;
pub mod record;
pub mod report;

pub use counter::FrequencyCounter;
pub use error::{Error, Result};
pub use generator::{seeded_rng, Generator, SampleRange};
pub use record::CountRecord;
pub use report::{OutputFormat, Report};

pub mod filter;
pub mod model;
pub mod outcome;
pub mod source;

pub use filter::{FilterSelection, SortOrder};
pub use model::{LaunchDetail, LaunchOutcome, LaunchRecord, Partition, Rocket};
pub use outcome::{OutcomeCategory, classify};
pub use source::LaunchSource;

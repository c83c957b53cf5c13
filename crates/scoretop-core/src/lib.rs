pub mod config;
pub mod convert;
pub mod error;
pub mod identity;
pub mod nbt;
pub mod pipeline;
pub mod report;
pub mod retry;
pub mod scoreboard;
pub mod snapshot;

pub use config::{CombineRule, Config, ConfigLayer, ConvertDirective};
pub use convert::Converter;
pub use error::{Error, Result};
pub use identity::IdentityEntry;
pub use nbt::Tag;
pub use pipeline::{run, run_once};
pub use report::{RankedObjective, RankedScore, Report, ScoreValue};
pub use retry::{FixedDelay, NoRetry, RetryStrategy};
pub use scoreboard::{Objective, PlayerScore};
pub use snapshot::SourceSnapshot;

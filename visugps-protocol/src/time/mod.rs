mod error;
mod value;

pub use error::{TimeError, TimeField};
pub use value::{
    TimeValue, MAX_HOUR, MAX_MINUTE, MAX_SECOND, SECONDS_PER_DAY, SECONDS_PER_HOUR,
    SECONDS_PER_MINUTE,
};

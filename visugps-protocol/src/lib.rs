pub mod time;

pub mod prelude {
    pub use crate::time::{TimeError, TimeField, TimeValue};
}

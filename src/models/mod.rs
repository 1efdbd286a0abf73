pub mod collection;
pub mod forecaster;
pub mod time;

pub use collection::*;
pub use forecaster::*;
pub use time::*;

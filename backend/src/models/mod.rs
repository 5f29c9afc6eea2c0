pub mod period;
pub mod restaurant;
pub mod time;

pub use period::*;
pub use restaurant::*;
pub use time::*;

pub mod error;
pub mod validation;
pub mod name;
pub mod model;
pub mod clock;
pub mod queries;
pub mod directory;
pub mod cli;

pub use clock::{Clock, FixedClock, SystemClock};
pub use directory::Directory;
pub use error::{DirectoryError, DirectoryResult, ErrorKind};
pub use model::{Entry, MonthDay};

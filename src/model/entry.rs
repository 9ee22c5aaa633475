use serde::{Deserialize, Serialize};

use super::month_day::MonthDay;

/// The data stored for one name in the directory. Both fields start unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub phone_number: Option<u64>,
    pub birthday: Option<MonthDay>,
}

impl Entry {
    pub fn create() -> Self {
        Self::default()
    }
}

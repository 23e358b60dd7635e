// View Types
// Different calendar view modes

use serde::{Deserialize, Serialize};

/// Calendar view types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewType {
    Day,
    Week,
    Month,
}

impl Default for ViewType {
    fn default() -> Self {
        ViewType::Month
    }
}

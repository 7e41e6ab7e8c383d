//! Sport category model

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SportCategory {
    pub id: String,
    pub name: String,
    pub icon: String,
}

//! Sport category repository implementation

use std::sync::Arc;
use crate::models::sport::SportCategory;

#[derive(Debug, Clone)]
pub struct SportRepository {
    sports: Arc<Vec<SportCategory>>,
}

impl SportRepository {
    pub fn new(sports: Vec<SportCategory>) -> Self {
        Self { sports: Arc::new(sports) }
    }

    pub fn list(&self) -> &[SportCategory] {
        &self.sports
    }

    pub fn find_by_name(&self, name: &str) -> Option<&SportCategory> {
        self.sports.iter().find(|sport| sport.name == name)
    }

    /// Sport names for filter dropdowns
    pub fn names(&self) -> Vec<String> {
        self.sports.iter().map(|sport| sport.name.clone()).collect()
    }
}

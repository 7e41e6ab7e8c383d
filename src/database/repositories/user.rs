//! User repository implementation

use std::sync::Arc;
use crate::models::user::User;
use crate::utils::helpers::unique_in_order;

#[derive(Debug, Clone)]
pub struct UserRepository {
    users: Arc<Vec<User>>,
}

impl UserRepository {
    pub fn new(users: Vec<User>) -> Self {
        Self { users: Arc::new(users) }
    }

    /// All users in catalog order
    pub fn list(&self) -> &[User] {
        &self.users
    }

    pub fn count(&self) -> usize {
        self.users.len()
    }

    /// Find user by ID
    pub fn find_by_id(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }

    /// Find user by email (exact match)
    pub fn find_by_email(&self, email: &str) -> Option<&User> {
        self.users.iter().find(|user| user.email == email)
    }

    pub fn email_exists(&self, email: &str) -> bool {
        self.find_by_email(email).is_some()
    }

    /// Users whose id is in `ids`, in catalog order
    pub fn find_many(&self, ids: &[String]) -> Vec<User> {
        self.users
            .iter()
            .filter(|user| ids.contains(&user.id))
            .cloned()
            .collect()
    }

    /// First `limit` users, shown on the home page
    pub fn featured(&self, limit: usize) -> Vec<User> {
        self.users.iter().take(limit).cloned().collect()
    }

    /// Distinct user locations in first-seen order
    pub fn locations(&self) -> Vec<String> {
        unique_in_order(self.users.iter().map(|user| user.location.as_str()))
    }
}

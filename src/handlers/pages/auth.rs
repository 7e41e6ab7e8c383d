//! Login and signup forms

use serde::{Deserialize, Serialize};
use crate::handlers::routes::Route;
use crate::state::AppContext;
use crate::utils::errors::{Result, SportsBuddyError};
use crate::utils::helpers::is_valid_email;

/// Form chrome driven by the session: spinner and last error message
#[derive(Debug, Clone, Default, Serialize)]
pub struct AuthPage {
    pub is_loading: bool,
    pub error: Option<String>,
}

pub fn load(ctx: &AppContext) -> AuthPage {
    let state = ctx.session.state();
    AuthPage {
        is_loading: state.is_loading,
        error: state.error,
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn new(email: &str, password: &str) -> Self {
        Self {
            email: email.trim().to_string(),
            password: password.to_string(),
        }
    }

    /// Field checks performed before the session is touched
    pub fn validate(&self) -> Result<()> {
        validate_email(&self.email)?;
        require("Password", &self.password)
    }

    /// Sign in and return where to navigate next
    pub async fn submit(&self, ctx: &AppContext) -> Result<Route> {
        self.validate()?;
        ctx.session.login(&self.email, &self.password).await?;
        Ok(Route::Home)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl SignupForm {
    pub fn new(name: &str, email: &str, password: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            password: password.to_string(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        require("Name", &self.name)?;
        validate_email(&self.email)?;
        require("Password", &self.password)
    }

    /// Create the account, sign in and return where to navigate next
    pub async fn submit(&self, ctx: &AppContext) -> Result<Route> {
        self.validate()?;
        ctx.session.signup(&self.name, &self.email, &self.password).await?;
        Ok(Route::Home)
    }
}

fn require(field: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(SportsBuddyError::InvalidInput(format!("{} is required", field)));
    }
    Ok(())
}

fn validate_email(email: &str) -> Result<()> {
    require("Email", email)?;
    if !is_valid_email(email) {
        return Err(SportsBuddyError::InvalidInput(
            "Please enter a valid email address".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_login_form_validation() {
        assert!(LoginForm::new("alex@example.com", "pw").validate().is_ok());
        assert_matches!(
            LoginForm::new("", "pw").validate(),
            Err(SportsBuddyError::InvalidInput(msg)) if msg == "Email is required"
        );
        assert_matches!(
            LoginForm::new("not-an-email", "pw").validate(),
            Err(SportsBuddyError::InvalidInput(_))
        );
        assert_matches!(
            LoginForm::new("alex@example.com", "").validate(),
            Err(SportsBuddyError::InvalidInput(msg)) if msg == "Password is required"
        );
    }

    #[test]
    fn test_signup_requires_name() {
        assert_matches!(
            SignupForm::new("  ", "ann@example.com", "pw").validate(),
            Err(SportsBuddyError::InvalidInput(msg)) if msg == "Name is required"
        );
    }

    #[tokio::test]
    async fn test_invalid_form_leaves_session_untouched() {
        let ctx = AppContext::for_tests().await;
        let result = LoginForm::new("bad", "pw").submit(&ctx).await;

        assert!(result.is_err());
        assert!(load(&ctx).error.is_none());
    }

    #[tokio::test]
    async fn test_failed_login_surfaces_error() {
        let ctx = AppContext::for_tests().await;
        let result = LoginForm::new("nobody@example.com", "pw").submit(&ctx).await;

        assert_matches!(result, Err(SportsBuddyError::Authentication(_)));
        let page = load(&ctx);
        assert_eq!(page.error.as_deref(), Some("Invalid email or password"));
        assert!(!page.is_loading);
    }

    #[tokio::test]
    async fn test_signup_redirects_home() {
        let ctx = AppContext::for_tests().await;
        let next = SignupForm::new("Ann", "ann@example.com", "pw")
            .submit(&ctx)
            .await
            .unwrap();

        assert_eq!(next, Route::Home);
        assert!(ctx.session.is_authenticated());
    }
}

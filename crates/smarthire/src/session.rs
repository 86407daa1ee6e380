//! Mock authentication: a single process-wide user held in a typed [`Store`].

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::store::{Store, SubscriptionId};

/// Roles a session user can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Candidate,
    Company,
    Hr,
}

impl Role {
    pub const fn label(self) -> &'static str {
        match self {
            Role::Candidate => "candidate",
            Role::Company => "company",
            Role::Hr => "hr",
        }
    }

    /// Company staff and HR members share the company-side screens.
    pub const fn is_company_side(self) -> bool {
        matches!(self, Role::Company | Role::Hr)
    }
}

/// Roles offered on the login form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoginRole {
    Candidate,
    Company,
}

impl From<LoginRole> for Role {
    fn from(value: LoginRole) -> Self {
        match value {
            LoginRole::Candidate => Role::Candidate,
            LoginRole::Company => Role::Company,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    #[error("email address is required")]
    MissingEmail,
    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),
    #[error("password is required")]
    MissingPassword,
}

const CANDIDATE_DISPLAY_NAME: &str = "John Doe";
const COMPANY_DISPLAY_NAME: &str = "TechCorp Inc.";
const COMPANY_ID: &str = "comp_123";

static USER_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_user_id() -> String {
    let id = USER_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    format!("usr-{id:06}")
}

/// Session store; cheap to clone, all clones share the same user slot.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<Store<Option<User>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fabricate a user for the chosen role. The password is only checked for presence.
    pub fn login(&self, email: &str, password: &str, role: LoginRole) -> Result<User, LoginError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(LoginError::MissingEmail);
        }
        if !email.contains('@') {
            return Err(LoginError::InvalidEmail(email.to_string()));
        }
        if password.is_empty() {
            return Err(LoginError::MissingPassword);
        }

        let role = Role::from(role);
        let user = match role {
            Role::Candidate => User {
                id: next_user_id(),
                name: CANDIDATE_DISPLAY_NAME.to_string(),
                email: email.to_string(),
                role,
                company_id: None,
            },
            Role::Company | Role::Hr => User {
                id: next_user_id(),
                name: COMPANY_DISPLAY_NAME.to_string(),
                email: email.to_string(),
                role,
                company_id: Some(COMPANY_ID.to_string()),
            },
        };

        info!(user_id = %user.id, role = role.label(), "session opened");
        self.inner.replace(Some(user.clone()));
        Ok(user)
    }

    pub fn logout(&self) {
        if let Some(user) = self.inner.get() {
            info!(user_id = %user.id, "session closed");
        }
        self.inner.replace(None);
    }

    pub fn current(&self) -> Option<User> {
        self.inner.get()
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner.get().is_some()
    }

    pub fn subscribe(
        &self,
        listener: impl Fn(&Option<User>) + Send + Sync + 'static,
    ) -> SubscriptionId {
        self.inner.subscribe(listener)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.inner.unsubscribe(id)
    }
}

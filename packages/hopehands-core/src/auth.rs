//! Credential verification
//!
//! [`Authenticator`] is the boundary a real identity service would sit
//! behind. The only implementation today is [`MockAuthenticator`], which
//! accepts the published demo accounts and donation-generated member
//! accounts.

use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::AuthError;
use crate::navigation::Page;

/// Role a session was opened with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Member,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Member => "member",
            Role::Admin => "admin",
        }
    }

    /// Parse the stored representation. Unknown values yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "member" => Some(Role::Member),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Member => "Member",
            Role::Admin => "Admin",
        }
    }

    /// Page a freshly signed-in user lands on
    pub fn landing_page(&self) -> Page {
        match self {
            Role::Member => Page::MemberDashboard,
            Role::Admin => Page::AdminDashboard,
        }
    }

    pub fn variants() -> &'static [Role] {
        &[Role::Member, Role::Admin]
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Submitted login form
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Credentials {
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>, role: Role) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            role,
        }
    }
}

/// Identity accepted by an [`Authenticator`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthGrant {
    pub email: String,
    pub role: Role,
}

/// Verifies submitted credentials
#[async_trait(?Send)]
pub trait Authenticator {
    async fn validate(&self, credentials: &Credentials) -> Result<AuthGrant, AuthError>;
}

/// Demo account shown on the login page
#[derive(Debug, Clone, Copy)]
pub struct DemoAccount {
    pub email: &'static str,
    pub password: &'static str,
    pub role: Role,
}

pub const DEMO_ACCOUNTS: [DemoAccount; 2] = [
    DemoAccount {
        email: "member@hopehands.org",
        password: "member123",
        role: Role::Member,
    },
    DemoAccount {
        email: "admin@hopehands.org",
        password: "admin123",
        role: Role::Admin,
    },
];

/// Password prefix handed out to accounts created through the donation flow
pub const DONOR_PASSWORD_PREFIX: &str = "donor";

/// Placeholder authenticator with fixed demo credentials
#[derive(Debug, Clone, Copy, Default)]
pub struct MockAuthenticator;

impl MockAuthenticator {
    pub fn new() -> Self {
        Self
    }

    fn is_demo_account(credentials: &Credentials) -> bool {
        DEMO_ACCOUNTS.iter().any(|account| {
            account.email == credentials.email
                && account.password == credentials.password
                && account.role == credentials.role
        })
    }

    fn is_donor_account(credentials: &Credentials) -> bool {
        credentials.role == Role::Member
            && credentials.email.contains('@')
            && credentials.password.starts_with(DONOR_PASSWORD_PREFIX)
    }
}

#[async_trait(?Send)]
impl Authenticator for MockAuthenticator {
    async fn validate(&self, credentials: &Credentials) -> Result<AuthGrant, AuthError> {
        if Self::is_demo_account(credentials) || Self::is_donor_account(credentials) {
            Ok(AuthGrant {
                email: credentials.email.clone(),
                role: credentials.role,
            })
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn check(email: &str, password: &str, role: Role) -> Result<AuthGrant, AuthError> {
        MockAuthenticator::new()
            .validate(&Credentials::new(email, password, role))
            .await
    }

    #[tokio::test]
    async fn test_demo_accounts_accepted() {
        let member = check("member@hopehands.org", "member123", Role::Member)
            .await
            .unwrap();
        assert_eq!(member.role, Role::Member);
        assert_eq!(member.email, "member@hopehands.org");

        let admin = check("admin@hopehands.org", "admin123", Role::Admin)
            .await
            .unwrap();
        assert_eq!(admin.role, Role::Admin);
    }

    #[tokio::test]
    async fn test_demo_account_requires_matching_role() {
        let result = check("admin@hopehands.org", "admin123", Role::Member).await;
        assert_eq!(result, Err(AuthError::InvalidCredentials));

        let result = check("member@hopehands.org", "member123", Role::Admin).await;
        assert_eq!(result, Err(AuthError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_donor_prefix_rule() {
        let grant = check("x@y.com", "donor123", Role::Member).await.unwrap();
        assert_eq!(grant.role, Role::Member);

        assert_eq!(
            check("x@y.com", "wrong1", Role::Member).await,
            Err(AuthError::InvalidCredentials)
        );
    }

    #[tokio::test]
    async fn test_donor_rule_is_member_only() {
        assert_eq!(
            check("x@y.com", "donor123", Role::Admin).await,
            Err(AuthError::InvalidCredentials)
        );
    }

    #[tokio::test]
    async fn test_donor_rule_requires_at_sign() {
        assert_eq!(
            check("not-an-email", "donor123", Role::Member).await,
            Err(AuthError::InvalidCredentials)
        );
    }

    #[tokio::test]
    async fn test_matching_is_exact() {
        // no trimming or case folding
        assert!(check(" member@hopehands.org", "member123", Role::Member)
            .await
            .is_err());
        assert!(check("Member@hopehands.org", "member123", Role::Member)
            .await
            .is_err());
        assert!(check("x@y.com", "Donor123", Role::Member).await.is_err());
    }

    #[test]
    fn test_role_parse() {
        assert_eq!(Role::parse("member"), Some(Role::Member));
        assert_eq!(Role::parse("admin"), Some(Role::Admin));
        assert_eq!(Role::parse("Admin"), None);
        assert_eq!(Role::parse(""), None);
    }

    #[test]
    fn test_landing_pages() {
        assert_eq!(Role::Member.landing_page(), Page::MemberDashboard);
        assert_eq!(Role::Admin.landing_page(), Page::AdminDashboard);
    }

    #[test]
    fn test_role_serde() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
        let role: Role = serde_json::from_str("\"member\"").unwrap();
        assert_eq!(role, Role::Member);
    }
}

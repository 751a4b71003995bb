//! # Application Context
//!
//! The explicitly passed context every operation takes: the store handle
//! and the signed-in user. There is no ambient global store and no
//! session-wide auth singleton - if an operation needs either, it says so
//! in its signature.
//!
//! ## Role Gates
//! Admin unlocks the destructive deletes (customer, product). Everything
//! else - creation entry points included - is open to any authenticated
//! user, and holding an `AppContext` at all is what "authenticated" means
//! here; building one is the caller's sign-in boundary.

use std::sync::Arc;

use volt_core::types::{Role, User};
use volt_store::Store;

use crate::error::{OpsError, OpsResult};

/// Per-session context threaded into every operation.
#[derive(Clone)]
pub struct AppContext {
    pub store: Arc<Store>,
    pub user: User,
}

impl AppContext {
    /// Creates a context for a signed-in user.
    pub fn new(store: Arc<Store>, user: User) -> Self {
        AppContext { store, user }
    }

    /// The current user's role.
    #[inline]
    pub fn role(&self) -> Role {
        self.user.role
    }

    /// Checks the admin gate for a destructive action.
    ///
    /// ## Example
    /// `ctx.require_admin("delete products")?;`
    pub fn require_admin(&self, action: &str) -> OpsResult<()> {
        if self.role() != Role::Admin {
            return Err(OpsError::Forbidden {
                role: self.role(),
                action: action.to_string(),
            });
        }

        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn user(role: Role) -> User {
        User {
            id: "u1".to_string(),
            email: "user@voltdesk.example".to_string(),
            role,
            display_name: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_admin_passes_gate() {
        let ctx = AppContext::new(Arc::new(Store::new()), user(Role::Admin));
        assert!(ctx.require_admin("delete customers").is_ok());
    }

    #[test]
    fn test_employee_refused_at_gate() {
        let ctx = AppContext::new(Arc::new(Store::new()), user(Role::Employee));
        let err = ctx.require_admin("delete customers").unwrap_err();
        assert!(matches!(err, OpsError::Forbidden { .. }));
    }
}

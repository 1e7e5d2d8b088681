//! Request authorization state machine.
//!
//! Every request re-evaluates the full chain from its session token:
//! authenticate, resolve the profile, then authorize against the requested
//! route class. Nothing is retried or cached across requests. The machine
//! itself is pure data so it can be tested without any HTTP layer.

use crate::{AuthenticatedIdentity, MembershipStanding, Profile};

/// Route classes the gate distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteClass {
    /// No authentication required
    Public,
    /// Requires a resolved profile
    Dashboard,
    /// Requires a currently valid membership
    Members,
    /// Requires an admin grant, independent of membership status
    Admin,
}

/// Scope granted to a request that passed the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    User,
    Admin,
}

/// Outcome of authorizing one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    Proceed(Scope),
    /// Back to sign-in, preserving the originally requested path
    SignIn { next: String },
    /// Authenticated but not entitled: send to the user dashboard
    Dashboard,
}

/// Per-request gate state. Terminal outcomes are `Proceed` or one of the
/// redirects; a failed authentication or resolution simply leaves the
/// machine in `Anonymous`.
#[derive(Debug, Clone, Default)]
pub enum GateState {
    #[default]
    Anonymous,
    Authenticated(AuthenticatedIdentity),
    ProfileResolved {
        profile: Profile,
        standing: MembershipStanding,
        is_admin: bool,
    },
}

impl GateState {
    pub fn new() -> Self {
        Self::Anonymous
    }

    /// Successful authentication: `Anonymous -> Authenticated`
    pub fn authenticated(self, identity: AuthenticatedIdentity) -> Self {
        Self::Authenticated(identity)
    }

    /// Successful profile resolution: `Authenticated -> ProfileResolved`
    pub fn profile_resolved(
        self,
        profile: Profile,
        standing: MembershipStanding,
        is_admin: bool,
    ) -> Self {
        Self::ProfileResolved {
            profile,
            standing,
            is_admin,
        }
    }

    pub fn identity(&self) -> Option<&AuthenticatedIdentity> {
        match self {
            Self::Authenticated(identity) => Some(identity),
            _ => None,
        }
    }

    /// Decide whether the current state may proceed on `route`.
    ///
    /// `requested_path` is carried into the sign-in redirect so the user
    /// lands back where they were headed once authenticated.
    pub fn authorize(&self, route: RouteClass, requested_path: &str) -> GateDecision {
        match (self, route) {
            (_, RouteClass::Public) => GateDecision::Proceed(Scope::User),

            (
                Self::ProfileResolved { is_admin, .. },
                RouteClass::Admin,
            ) => {
                if *is_admin {
                    GateDecision::Proceed(Scope::Admin)
                } else {
                    GateDecision::Dashboard
                }
            }

            (
                Self::ProfileResolved { standing, .. },
                RouteClass::Members,
            ) => {
                if standing.is_current() {
                    GateDecision::Proceed(Scope::User)
                } else {
                    GateDecision::Dashboard
                }
            }

            (Self::ProfileResolved { .. }, RouteClass::Dashboard) => {
                GateDecision::Proceed(Scope::User)
            }

            // Anonymous or merely authenticated: back through sign-in
            _ => GateDecision::SignIn {
                next: requested_path.to_string(),
            },
        }
    }
}

//! Route guard for authenticated and admin-only pages.
//!
//! The guard is a small state machine. Auth updates arrive as events through
//! [`RouteGuard::on_auth_change`], which returns the redirect to perform, if
//! any. Rendering via [`RouteGuard::render`] is pure and never navigates.

use tracing::debug;

pub const LOGIN_PATH: &str = "/login";
pub const HOME_PATH: &str = "/";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardMode {
    /// Any signed-in user
    Authenticated,
    /// Signed-in users with the admin flag
    Admin,
}

/// The parts of the session the guard looks at.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthSnapshot {
    pub user_id: Option<String>,
    pub is_admin: bool,
    pub loading: bool,
}

impl AuthSnapshot {
    pub fn loading() -> Self {
        Self {
            loading: true,
            ..Self::default()
        }
    }

    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn signed_in(user_id: impl Into<String>) -> Self {
        Self {
            user_id: Some(user_id.into()),
            ..Self::default()
        }
    }

    pub fn admin(mut self) -> Self {
        self.is_admin = true;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardState {
    Loading,
    Unauthorized,
    Forbidden,
    Authorized,
}

impl GuardState {
    pub fn evaluate(mode: GuardMode, auth: &AuthSnapshot) -> Self {
        if auth.loading {
            return Self::Loading;
        }
        match (&auth.user_id, mode) {
            (None, _) => Self::Unauthorized,
            (Some(_), GuardMode::Admin) if !auth.is_admin => Self::Forbidden,
            (Some(_), _) => Self::Authorized,
        }
    }

    /// Where a guard in this state sends the user
    pub fn redirect(self) -> Option<Navigation> {
        match self {
            Self::Unauthorized => Some(Navigation::to(LOGIN_PATH)),
            Self::Forbidden => Some(Navigation::to(HOME_PATH)),
            Self::Loading | Self::Authorized => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigation {
    pub path: &'static str,
}

impl Navigation {
    pub const fn to(path: &'static str) -> Self {
        Self { path }
    }
}

/// Output of [`RouteGuard::render`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered<C> {
    Spinner,
    /// A redirect is pending; protected content must not flash
    Nothing,
    Children(C),
}

#[derive(Debug, Clone)]
pub struct RouteGuard {
    mode: GuardMode,
    state: GuardState,
}

impl RouteGuard {
    /// A guard that shows the spinner until the first auth event
    pub fn new(mode: GuardMode) -> Self {
        Self {
            mode,
            state: GuardState::Loading,
        }
    }

    pub fn mode(&self) -> GuardMode {
        self.mode
    }

    pub fn state(&self) -> GuardState {
        self.state
    }

    /// Apply an auth update and return the redirect it calls for.
    ///
    /// A redirect is emitted once per transition into a redirecting state;
    /// repeated events with the same outcome do not navigate again.
    pub fn on_auth_change(&mut self, auth: &AuthSnapshot) -> Option<Navigation> {
        let next = GuardState::evaluate(self.mode, auth);
        let previous = std::mem::replace(&mut self.state, next);
        if previous == next {
            return None;
        }

        debug!(mode = ?self.mode, from = ?previous, to = ?next, "Route guard transition");
        next.redirect()
    }

    pub fn render<C>(&self, children: C) -> Rendered<C> {
        match self.state {
            GuardState::Loading => Rendered::Spinner,
            GuardState::Unauthorized | GuardState::Forbidden => Rendered::Nothing,
            GuardState::Authorized => Rendered::Children(children),
        }
    }
}

use std::fmt;

/// Pages rendered full-bleed, without the page container.
pub const AUTH_PATHS: [&str; 3] = ["/login", "/signup", "/forgot-password"];

pub const CONTAINER_CLASS: &str = "container mx-auto px-4 py-8";

/// Page chrome chosen for a route.
///
/// Auth pages manage their own centring; every other page is wrapped in a
/// padded, centred container. Matching is on the exact path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Layout<C> {
    Bare(C),
    Contained(C),
}

impl<C> Layout<C> {
    pub fn for_path(path: &str, children: C) -> Self {
        if is_auth_path(path) {
            Self::Bare(children)
        } else {
            Self::Contained(children)
        }
    }

    pub fn children(&self) -> &C {
        match self {
            Self::Bare(children) | Self::Contained(children) => children,
        }
    }

    pub fn into_children(self) -> C {
        match self {
            Self::Bare(children) | Self::Contained(children) => children,
        }
    }

    pub fn is_contained(&self) -> bool {
        matches!(self, Self::Contained(_))
    }
}

pub fn is_auth_path(path: &str) -> bool {
    AUTH_PATHS.contains(&path)
}

/// Renders the wrapper markup around already-rendered children.
impl<C: fmt::Display> fmt::Display for Layout<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bare(children) => write!(f, "{children}"),
            Self::Contained(children) => {
                write!(f, r#"<div class="{CONTAINER_CLASS}">{children}</div>"#)
            }
        }
    }
}

//! Presentation helpers for the storefront.
//!
//! View-side decisions that do not need a browser: which page chrome a route
//! gets, the product create/edit modal, the auth route guard, Tailwind class
//! merging and price display.

pub mod classes;
pub mod form;
pub mod format;
pub mod guard;
pub mod layout;
pub mod modal;

pub use classes::cn;
pub use form::ProductFormData;
pub use format::format_price;
pub use guard::{AuthSnapshot, GuardMode, GuardState, Navigation, Rendered, RouteGuard};
pub use layout::Layout;
pub use modal::{ModalMode, ProductModal};

//! The dashboard client: everything the admin UI does except draw pixels.
//! Holds per-entity collections, a single active view, one open modal form,
//! and the fetch/submit/refresh plumbing against the gateway.

pub mod api;
pub mod forms;
pub mod state;

pub use api::{ApiClient, ApiError};
pub use forms::{FieldKind, FieldSpec, FormSpec, ModalKind};
pub use state::{ActiveView, Collections, Dashboard, DeleteTarget, ModalForm};

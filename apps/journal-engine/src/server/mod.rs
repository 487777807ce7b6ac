//! HTTP/REST API layer.
//!
//! Inbound adapter implementing REST endpoints that delegate to the
//! ledger layer through an in-memory session store.

mod handlers;
mod request;
mod response;
mod store;

pub use handlers::{AppState, create_router};
pub use request::*;
pub use response::*;
pub use store::SessionStore;

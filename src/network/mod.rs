//! Network Module
//!
//! HTTP server and request handlers.
//!
//! ## Routes
//! ```text
//! GET    /                     embedded front-end page
//! GET    /api/features         list           200
//! POST   /api/features         create         201 | 400
//! PUT    /api/features/:id     partial update 200 | 400 | 404
//! DELETE /api/features/:id     delete         200 | 404
//! ```
//!
//! ## Architecture
//! - tokio runtime, axum router
//! - Board operations run on the blocking pool (file I/O)
//! - Errors rendered as `{"error": "..."}` bodies

mod server;
mod handlers;
mod response;

pub use server::{router, Server};
pub use handlers::{
    create_feature, delete_feature, index, list_features, update_feature, AppState,
};
pub use response::{DeleteResponse, ErrorBody};

/*
[INPUT]:  HTTP client configuration and backend endpoints
[OUTPUT]: Decoded JSON responses or OperationFailed errors
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod auth;
pub mod client;
pub mod error;
pub mod movies;
pub mod operation;
pub mod session;

pub use error::{CineListError, FailureCause, Result};
pub use operation::{Credentials, Operation};
pub use session::Session;

pub use client::{CineListClient, ClientConfig, ResetPasswordBase};

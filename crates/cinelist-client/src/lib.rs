/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public CineList client crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod http;
pub mod types;

// Re-export commonly used types from http
pub use http::{
    ClientConfig,
    CineListClient,
    CineListError,
    Credentials,
    FailureCause,
    Operation,
    ResetPasswordBase,
    Result,
    Session,
};

// Re-export all types
pub use types::*;

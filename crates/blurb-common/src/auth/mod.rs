//! Session cookie tokens

mod session_token;

pub use session_token::{SessionClaims, SessionTokenService};

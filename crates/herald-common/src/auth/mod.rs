//! Authentication utilities

mod jwt;
mod passcode;

pub use jwt::{CallerClaims, Claims, JwtService};
pub use passcode::{hash_passcode, verify_passcode};

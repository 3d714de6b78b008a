//! Credentials and the authentication material derived from them

mod scheme;
mod types;

pub use scheme::{decode_basic, AuthMaterial, AuthScheme};
pub use types::{Credential, UsernamePolicy};

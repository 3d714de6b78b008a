//! # challonge-core
//!
//! Core pieces shared by the Challonge API client:
//! - Validated, immutable credentials with zeroize-on-drop key storage
//! - Authentication schemes and the request material they produce
//! - Non-sensitive client settings persisted as JSON

pub mod credential;
pub mod error;
pub mod secret;
pub mod settings;

pub use credential::{decode_basic, AuthMaterial, AuthScheme, Credential, UsernamePolicy};
pub use error::{CoreError, Result};
pub use secret::SecretString;
pub use settings::{Settings, SettingsManager, DEFAULT_BASE_URL};

//! Common types for the Keyline workspace crates

mod secret;

pub use secret::SecretString;

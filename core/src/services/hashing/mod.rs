//! Secret hashing for passwords and product keys

mod service;

pub use service::SecretHasher;

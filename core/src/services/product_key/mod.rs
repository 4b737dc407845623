//! Product keys: shared-secret credentials for non-buyer self registration

mod service;

pub use service::ProductKeyService;

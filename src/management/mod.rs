mod auth;
mod counter;
mod credentials;
mod offline;

pub use auth::AuthTokenCache;
pub use counter::SubmissionCounter;
pub use credentials::CredentialStore;
pub use offline::OfflineQueue;

mod auth;
mod client;
mod errors;
pub use self::auth::AuthClient;
pub use self::client::CatalogClient;
pub use self::errors::Error;

//! Route handlers, one module per endpoint.

pub mod health;
pub mod ping;

pub use health::health;
pub use ping::ping;

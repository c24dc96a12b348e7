//! Route handlers, one module per endpoint.

pub mod health;
pub mod ping;
pub mod tables;

pub use health::health;
pub use ping::ping;
pub use tables::list_tables;

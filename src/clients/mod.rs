//! Clients that implement the user service boundary.

mod user_client;

pub use user_client::UserClient;

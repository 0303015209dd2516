pub mod article;
pub mod user;

pub use article::*;
pub use user::*;

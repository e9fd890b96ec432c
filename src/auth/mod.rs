pub mod jwt;

pub use jwt::{verify_jwt, Claims};

pub mod sessions;
pub mod token;

pub use sessions::{AdminSessions, SESSION_COOKIE};

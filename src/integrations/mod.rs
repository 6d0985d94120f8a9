//! External service integrations.

pub mod ideasoft_client {
    pub use crate::ideasoft_client::*;
}

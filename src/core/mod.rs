// Domain-layer models and shared errors
pub mod models {
    pub use crate::models::*;
}

pub mod errors {
    pub use crate::errors::*;
}

pub mod lead_storage {
    pub use crate::lead_storage::*;
}

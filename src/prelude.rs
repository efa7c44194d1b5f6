pub use crate::cli::{command, run_app};
pub use crate::config::StoreConfig;
pub use crate::domain::contact::{self, Contact};
pub use crate::errors::{AppError, DuplicateField};
pub use crate::store::{self, ContactStore, MemStore, TxtStore};

pub mod memory;
pub mod rewrite;
pub mod txt;

pub use memory::MemStore;
pub use txt::TxtStore;

use crate::domain::contact::Contact;
use crate::errors::AppError;

/// The four operations every phone book backend offers.
///
/// Names are the primary key and phones are unique across records.
/// Outcomes other than success come back as `AppError::Duplicate`,
/// `AppError::NotFound` or `AppError::Io`; a failed call changes nothing.
pub trait ContactStore {
    /// Adds a record, rejecting it if its name or phone is already stored.
    fn create(&mut self, name: &str, phone: &str) -> Result<Contact, AppError>;

    /// First record whose name matches exactly.
    fn find(&self, name: &str) -> Result<Contact, AppError>;

    /// Replaces the phone of the named record, keeping its position.
    fn update(&mut self, name: &str, phone: &str) -> Result<Contact, AppError>;

    /// Removes the named record and returns it.
    fn delete(&mut self, name: &str) -> Result<Contact, AppError>;
}

pub(crate) fn contact_not_found() -> AppError {
    AppError::NotFound("Contact".to_string())
}

use super::{ContactStore, contact_not_found};
use crate::domain::contact::Contact;
use crate::errors::{AppError, DuplicateField};

/// In-memory phone book with the same contract as [`super::TxtStore`].
/// Nothing survives the process.
#[derive(Debug, Default, Clone)]
pub struct MemStore {
    pub data: Vec<Contact>,
}

impl MemStore {
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    #[cfg(test)]
    pub(crate) fn iter(&self) -> std::slice::Iter<'_, Contact> {
        self.data.iter()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.data.iter().position(|cont| cont.name == name)
    }
}

impl ContactStore for MemStore {
    fn create(&mut self, name: &str, phone: &str) -> Result<Contact, AppError> {
        for cont in &self.data {
            if cont.name == name {
                return Err(AppError::Duplicate {
                    field: DuplicateField::Name,
                    value: name.to_string(),
                });
            }
            if cont.phone == phone {
                return Err(AppError::Duplicate {
                    field: DuplicateField::Phone,
                    value: phone.to_string(),
                });
            }
        }

        let contact = Contact::new(name.to_string(), phone.to_string());
        self.data.push(contact.clone());
        Ok(contact)
    }

    fn find(&self, name: &str) -> Result<Contact, AppError> {
        self.position(name)
            .map(|idx| self.data[idx].clone())
            .ok_or_else(contact_not_found)
    }

    fn update(&mut self, name: &str, phone: &str) -> Result<Contact, AppError> {
        let idx = self.position(name).ok_or_else(contact_not_found)?;

        if self
            .data
            .iter()
            .any(|cont| cont.name != name && cont.phone == phone)
        {
            return Err(AppError::Duplicate {
                field: DuplicateField::Phone,
                value: phone.to_string(),
            });
        }

        self.data[idx].phone = phone.to_string();
        Ok(self.data[idx].clone())
    }

    fn delete(&mut self, name: &str) -> Result<Contact, AppError> {
        let idx = self.position(name).ok_or_else(contact_not_found)?;
        Ok(self.data.remove(idx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(records: &[(&str, &str)]) -> MemStore {
        let mut store = MemStore::new();
        for (name, phone) in records {
            store.data.push(Contact::new(name.to_string(), phone.to_string()));
        }
        store
    }

    #[test]
    fn round_trips_create_and_find() -> Result<(), AppError> {
        let mut store = MemStore::new();

        store.create("Alice", "08031234567")?;

        assert_eq!(store.find("Alice")?.phone, "08031234567");
        Ok(())
    }

    #[test]
    fn rejects_duplicates() {
        let mut store = store_with(&[("A", "1")]);

        assert!(store.create("A", "2").unwrap_err().is_duplicate());
        assert!(store.create("B", "1").unwrap_err().is_duplicate());
        assert_eq!(store.iter().count(), 1);
    }

    #[test]
    fn update_keeps_position_and_exempts_own_phone() -> Result<(), AppError> {
        let mut store = store_with(&[("A", "1"), ("B", "2"), ("C", "3")]);

        store.update("B", "9")?;
        store.update("C", "3")?;

        let names: Vec<&str> = store.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["A", "B", "C"]);
        assert_eq!(store.find("B")?.phone, "9");
        assert!(store.update("A", "9").unwrap_err().is_duplicate());
        assert!(store.update("Z", "5").unwrap_err().is_not_found());
        Ok(())
    }

    #[test]
    fn delete_removes_one() -> Result<(), AppError> {
        let mut store = store_with(&[("A", "1"), ("B", "2")]);

        store.delete("A")?;

        assert!(store.find("A").unwrap_err().is_not_found());
        assert_eq!(store.find("B")?.phone, "2");
        assert!(store.delete("A").unwrap_err().is_not_found());
        Ok(())
    }
}

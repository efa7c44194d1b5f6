use std::fs::{self, File, OpenOptions};
use std::io::{self, BufReader, Read, Write};
use std::path::Path;

use tracing::{debug, info, warn};

use super::rewrite::Rewrite;
use super::{ContactStore, contact_not_found};
use crate::config::StoreConfig;
use crate::domain::contact::Contact;
use crate::errors::{AppError, DuplicateField};
use crate::helper::{self, TxtRecords};

/// Phone book persisted as `name<SEP>phone` lines in a single text file.
///
/// Appends go straight to the file as one buffered write. Updates and
/// deletes stream the file into a sibling temp file and rename it over the
/// original, so a crash leaves either the old or the new file, never a mix.
/// There is no locking: concurrent writers must be serialised by the caller.
#[derive(Debug, Clone)]
pub struct TxtStore {
    config: StoreConfig,
}

impl TxtStore {
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    pub fn path(&self) -> &Path {
        self.config.path()
    }

    pub fn separator(&self) -> char {
        self.config.separator
    }

    /// Every well-formed record in file order. A missing file reads as empty.
    #[cfg(test)]
    pub(crate) fn load(&self) -> Result<Vec<Contact>, AppError> {
        match self.open_reader()? {
            Some(reader) => helper::deserialize_contacts_from_txt_buffer(reader, self.separator()),
            None => Ok(Vec::new()),
        }
    }

    /// Best-effort rollback of a failed append. `previous_len` is the size
    /// before the write, or `None` when this create made the file, in which
    /// case the file is removed again. Failures are logged, not returned, so
    /// the caller reports the write error itself.
    fn undo_append(&self, file: &File, previous_len: Option<u64>) {
        let undone = match previous_len {
            Some(len) => file.set_len(len),
            None => fs::remove_file(self.path()),
        };

        if let Err(e) = undone {
            warn!(
                path = %self.path().display(),
                error = %e,
                "could not roll back partial append"
            );
        }
    }

    fn open_reader(&self) -> Result<Option<BufReader<File>>, AppError> {
        match File::open(self.path()) {
            Ok(file) => Ok(Some(BufReader::new(file))),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Streams the file into a [`Rewrite`], replacing (`Some(phone)`) or
    /// dropping (`None`) the records named `name`. Commits only if one matched.
    fn rewrite(&self, name: &str, new_phone: Option<&str>) -> Result<Contact, AppError> {
        let Some(reader) = self.open_reader()? else {
            debug!(path = %self.path().display(), "no contact file yet");
            return Err(contact_not_found());
        };

        let separator = self.separator();
        let mut rewrite = Rewrite::begin(self.path())?;
        let mut target: Option<Contact> = None;
        let mut phone_taken = false;

        for record in TxtRecords::new(reader, separator) {
            let (raw, contact) = record?;

            if contact.name == name {
                let kept = match new_phone {
                    Some(phone) => {
                        let updated = Contact::new(contact.name, phone.to_string());
                        rewrite.write_line(&updated.to_line(separator))?;
                        updated
                    }
                    None => contact,
                };
                if target.is_none() {
                    target = Some(kept);
                }
                continue;
            }

            if new_phone.is_some_and(|phone| contact.phone == phone) {
                phone_taken = true;
            }
            rewrite.write_line(&raw)?;
        }

        let Some(contact) = target else {
            debug!(name, "no matching contact, original left untouched");
            return Err(contact_not_found());
        };

        if phone_taken {
            return Err(AppError::Duplicate {
                field: DuplicateField::Phone,
                value: contact.phone,
            });
        }

        rewrite.commit()?;
        Ok(contact)
    }
}

impl ContactStore for TxtStore {
    /// The file is opened with `create`, so it exists while the duplicate
    /// scan runs; if the append then fails a file this call created is
    /// removed again, and a pre-existing one is truncated to its old length.
    fn create(&mut self, name: &str, phone: &str) -> Result<Contact, AppError> {
        debug!(path = %self.path().display(), name, "creating contact");
        helper::create_file_parent(self.path())?;
        let existed = self.path().exists();

        let mut file = OpenOptions::new()
            .read(true)
            .append(true)
            .create(true)
            .open(self.path())?;

        let mut existing = Vec::new();
        file.read_to_end(&mut existing)?;

        for record in TxtRecords::new(&existing[..], self.separator()) {
            let (_, contact) = record?;
            if contact.name == name {
                return Err(AppError::Duplicate {
                    field: DuplicateField::Name,
                    value: name.to_string(),
                });
            }
            if contact.phone == phone {
                return Err(AppError::Duplicate {
                    field: DuplicateField::Phone,
                    value: phone.to_string(),
                });
            }
        }

        let contact = Contact::new(name.to_string(), phone.to_string());

        // Whole line goes out in one write; an unterminated last line gets
        // its newline first so records never merge.
        let mut line = String::new();
        if existing.last().is_some_and(|&b| b != b'\n') {
            line.push('\n');
        }
        line.push_str(&contact.to_line(self.separator()));

        if let Err(e) = file.write_all(line.as_bytes()).and_then(|_| file.sync_all()) {
            let previous_len = existed.then_some(existing.len() as u64);
            self.undo_append(&file, previous_len);
            return Err(e.into());
        }

        info!(name, "contact created");
        Ok(contact)
    }

    fn find(&self, name: &str) -> Result<Contact, AppError> {
        debug!(path = %self.path().display(), name, "looking up contact");
        let Some(reader) = self.open_reader()? else {
            return Err(contact_not_found());
        };

        for record in TxtRecords::new(reader, self.separator()) {
            let (_, contact) = record?;
            if contact.name == name {
                return Ok(contact);
            }
        }
        Err(contact_not_found())
    }

    fn update(&mut self, name: &str, phone: &str) -> Result<Contact, AppError> {
        debug!(path = %self.path().display(), name, "updating contact");
        let contact = self.rewrite(name, Some(phone))?;
        info!(name, "contact updated");
        Ok(contact)
    }

    fn delete(&mut self, name: &str) -> Result<Contact, AppError> {
        debug!(path = %self.path().display(), name, "deleting contact");
        let contact = self.rewrite(name, None)?;
        info!(name, "contact deleted");
        Ok(contact)
    }
}

use std::fs;
use std::io::BufRead;
use std::path::Path;

use tracing::warn;

use crate::domain::contact::{Contact, strip_line_ending};
use crate::errors::AppError;

/// Streams the well-formed records of a txt store, each paired with the raw
/// line it was read from. Blank lines, lines without exactly one separator
/// and lines that are not UTF-8 are skipped.
pub struct TxtRecords<R> {
    reader: R,
    separator: char,
    buf: Vec<u8>,
    line_no: usize,
}

impl<R: BufRead> TxtRecords<R> {
    pub fn new(reader: R, separator: char) -> Self {
        Self {
            reader,
            separator,
            buf: Vec::new(),
            line_no: 0,
        }
    }
}

impl<R: BufRead> Iterator for TxtRecords<R> {
    type Item = Result<(String, Contact), AppError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.buf.clear();
            match self.reader.read_until(b'\n', &mut self.buf) {
                Ok(0) => return None,
                Ok(_) => self.line_no += 1,
                Err(e) => return Some(Err(e.into())),
            }

            let Ok(raw) = std::str::from_utf8(&self.buf) else {
                warn!(line = self.line_no, "skipping line that is not valid UTF-8");
                continue;
            };

            match Contact::from_line(raw, self.separator) {
                Some(contact) => return Some(Ok((raw.to_string(), contact))),
                None => {
                    if !strip_line_ending(raw).is_empty() {
                        warn!(line = self.line_no, "skipping malformed contact line");
                    }
                }
            }
        }
    }
}

#[cfg(test)]
pub(crate) fn deserialize_contacts_from_txt_buffer<R: BufRead>(
    reader: R,
    separator: char,
) -> Result<Vec<Contact>, AppError> {
    TxtRecords::new(reader, separator)
        .map(|record| record.map(|(_, contact)| contact))
        .collect()
}

pub fn create_file_parent(path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

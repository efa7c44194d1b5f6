/// Separator reserved between name and phone on every stored line.
pub const DEFAULT_SEPARATOR: char = '!';

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Contact {
    pub name: String,
    pub phone: String,
}

impl Contact {
    pub fn new(name: String, phone: String) -> Self {
        Contact { name, phone }
    }

    /// Full stored line, newline included.
    pub fn to_line(&self, separator: char) -> String {
        format!("{}{}{}\n", self.name, separator, self.phone)
    }

    /// Parses one stored line. Returns `None` for blank lines and for lines
    /// without exactly one separator.
    pub fn from_line(line: &str, separator: char) -> Option<Self> {
        let line = strip_line_ending(line);
        if line.is_empty() {
            return None;
        }

        let mut parts = line.split(separator);
        let name = parts.next()?;
        let phone = parts.next()?;
        if parts.next().is_some() {
            return None;
        }

        Some(Contact::new(name.to_string(), phone.to_string()))
    }
}

pub fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

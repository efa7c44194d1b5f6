#![allow(dead_code)]

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A throwaway contact file for one test.
pub struct Book {
    _dir: TempDir,
    pub path: PathBuf,
}

impl Book {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("contacts.txt");
        Book { _dir: dir, path }
    }

    pub fn with_lines(content: &str) -> Self {
        let book = Book::new();
        std::fs::write(&book.path, content).unwrap();
        book
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("rusty-phonebook").unwrap();
        cmd.env("TXT_STORAGE_PATH", &self.path).env_remove("RUST_LOG");
        cmd
    }

    pub fn content(&self) -> String {
        std::fs::read_to_string(&self.path).unwrap()
    }

    pub fn temp_file(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    pub fn exists(&self) -> bool {
        Path::new(&self.path).exists()
    }
}

use crate::reader::interface::{Entry, FileReader};
use crate::reader::list_children;
use rust_embed::RustEmbed;
use std::io;

/// Template set compiled into the binary.
#[derive(RustEmbed)]
#[folder = "assets/"]
struct Assets;

/// Reader over the template bundle shipped with gostrap.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedReader;

impl EmbeddedReader {
    pub fn new() -> Self {
        Self
    }
}

impl FileReader for EmbeddedReader {
    fn read_file(&self, name: &str) -> io::Result<Vec<u8>> {
        let name = name.replace('\\', "/");
        Assets::get(&name)
            .map(|file| file.data.into_owned())
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("embedded file '{name}' not found"),
                )
            })
    }

    fn list_entries(&self, dir: &str) -> io::Result<Vec<Entry>> {
        list_children(Assets::iter(), dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_template_set() {
        let reader = EmbeddedReader::new();
        let entries = reader.list_entries("template").unwrap();

        for expected in [
            ".gitignore",
            ".golangci.yml",
            "README.md.templ",
            "go.mod.templ",
            "main.go.templ",
            "project.code-workspace",
        ] {
            assert!(
                entries.contains(&Entry::file(expected)),
                "missing embedded template {expected}"
            );
        }
    }

    #[test]
    fn test_embedded_read_file() {
        let reader = EmbeddedReader::new();
        let content = reader.read_file("template/go.mod.templ").unwrap();
        let content = String::from_utf8(content).unwrap();
        assert!(content.starts_with("module {{ Module }}"));

        let ignore = reader.read_file("template/.gitignore").unwrap();
        assert!(!ignore.is_empty());

        let err = reader.read_file("template/missing").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}

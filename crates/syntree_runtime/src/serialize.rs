//! Tree export and import.
//!
//! Three formats, all pure functions of a tree:
//!
//! - JSON: the lossless record shape `{ id, label, type, value?, children, metadata? }`
//! - `MessagePack`: the same record, compact and binary
//! - Text: indented `type[: value]` lines, export only
//!
//! Files pick their format from the extension: `.json`, `.txt`, and anything
//! else is `MessagePack`.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use serde::Serialize;
use syntree_foundation::{Error, ErrorKind, Result, TreeNode, ValidationError, render_text};

/// Export formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    /// Pretty-printed JSON.
    Json,
    /// Named `MessagePack`.
    MessagePack,
    /// Indented text.
    Text,
}

impl Format {
    /// Picks a format from a file extension.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            Some(ext) if ext.eq_ignore_ascii_case("txt") => Self::Text,
            _ => Self::MessagePack,
        }
    }
}

/// A tree with its findings, as one JSON document.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    /// The tree.
    pub tree: &'a TreeNode,
    /// Validation findings.
    pub findings: &'a [ValidationError],
}

fn serialization_error(e: impl std::fmt::Display) -> Error {
    Error::new(ErrorKind::SerializationError(e.to_string()))
}

/// Serializes a tree to pretty JSON.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_json(tree: &TreeNode) -> Result<String> {
    serde_json::to_string_pretty(tree).map_err(serialization_error)
}

/// Deserializes a tree from JSON.
///
/// Tags outside the known universe are kept as they are.
///
/// # Errors
///
/// Returns an error if the text is not a valid tree record.
pub fn from_json(json: &str) -> Result<TreeNode> {
    serde_json::from_str(json).map_err(serialization_error)
}

/// Serializes a tree and its findings to pretty JSON.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn report_to_json(tree: &TreeNode, findings: &[ValidationError]) -> Result<String> {
    serde_json::to_string_pretty(&Report { tree, findings }).map_err(serialization_error)
}

/// Serializes findings to pretty JSON.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn findings_to_json(findings: &[ValidationError]) -> Result<String> {
    serde_json::to_string_pretty(findings).map_err(serialization_error)
}

/// Serializes a tree to `MessagePack` bytes.
///
/// Uses named serialization to preserve field names.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_bytes(tree: &TreeNode) -> Result<Vec<u8>> {
    rmp_serde::to_vec_named(tree).map_err(serialization_error)
}

/// Deserializes a tree from `MessagePack` bytes.
///
/// # Errors
///
/// Returns an error if deserialization fails.
pub fn from_bytes(bytes: &[u8]) -> Result<TreeNode> {
    rmp_serde::from_slice(bytes).map_err(serialization_error)
}

/// Encodes a tree in the given format.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn export(tree: &TreeNode, format: Format) -> Result<Vec<u8>> {
    match format {
        Format::Json => to_json(tree).map(String::into_bytes),
        Format::MessagePack => to_bytes(tree),
        Format::Text => Ok(render_text(tree).into_bytes()),
    }
}

/// Decodes a tree from the given format.
///
/// # Errors
///
/// Returns an error if the bytes are not a tree in that format. Text is
/// export only and always fails.
pub fn import(bytes: &[u8], format: Format) -> Result<TreeNode> {
    match format {
        Format::Json => {
            let json = std::str::from_utf8(bytes).map_err(serialization_error)?;
            from_json(json)
        }
        Format::MessagePack => from_bytes(bytes),
        Format::Text => Err(serialization_error("text exports cannot be loaded")),
    }
}

/// Saves a tree to a file, in the format its extension names.
///
/// Creates the file if it doesn't exist, or overwrites it if it does.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written to,
/// or if serialization fails.
pub fn save_to_file<P: AsRef<Path>>(tree: &TreeNode, path: P) -> Result<()> {
    let path = path.as_ref();
    let bytes = export(tree, Format::from_path(path))?;

    let file = File::create(path).map_err(|e| {
        Error::new(ErrorKind::IoError(format!(
            "failed to create file '{}': {e}",
            path.display()
        )))
    })?;
    let mut writer = BufWriter::new(file);

    writer.write_all(&bytes).map_err(|e| {
        Error::new(ErrorKind::IoError(format!(
            "failed to write to file '{}': {e}",
            path.display()
        )))
    })?;
    writer.flush().map_err(|e| {
        Error::new(ErrorKind::IoError(format!(
            "failed to flush file '{}': {e}",
            path.display()
        )))
    })?;

    Ok(())
}

/// Loads a tree from a file, in the format its extension names.
///
/// # Errors
///
/// Returns an error if the file cannot be read or if deserialization fails.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<TreeNode> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        Error::new(ErrorKind::IoError(format!(
            "failed to open file '{}': {e}",
            path.display()
        )))
    })?;

    let mut reader = BufReader::new(file);
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes).map_err(|e| {
        Error::new(ErrorKind::IoError(format!(
            "failed to read file '{}': {e}",
            path.display()
        )))
    })?;

    import(&bytes, Format::from_path(path))
}

use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// How text is encoded when written to disk
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FileEncoding {
    /// Plain UTF-8
    Utf8,
    /// UTF-8 preceded by a byte-order mark
    #[default]
    Utf8WithBom,
}

impl FileEncoding {
    fn preamble(&self) -> &'static [u8] {
        match self {
            FileEncoding::Utf8 => &[],
            FileEncoding::Utf8WithBom => UTF8_BOM,
        }
    }
}

/// Write `input` to `directory/file_name` as UTF-8 with a byte-order mark.
///
/// Missing directories are created and an existing file is replaced.
/// Returns the path written.
pub fn write_to_file(
    input: &str,
    directory: impl AsRef<Path>,
    file_name: impl AsRef<Path>,
) -> Result<PathBuf> {
    write_to_file_with_encoding(input, directory, file_name, FileEncoding::default())
}

/// Like [`write_to_file`] with an explicit encoding.
pub fn write_to_file_with_encoding(
    input: &str,
    directory: impl AsRef<Path>,
    file_name: impl AsRef<Path>,
    encoding: FileEncoding,
) -> Result<PathBuf> {
    let path = directory.as_ref().join(file_name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create directory '{}'", parent.display()))?;
    }

    let preamble = encoding.preamble();
    let mut bytes = Vec::with_capacity(preamble.len() + input.len());
    bytes.extend_from_slice(preamble);
    bytes.extend_from_slice(input.as_bytes());

    std::fs::write(&path, bytes).wrap_err_with(|| format!("failed to write '{}'", path.display()))?;
    Ok(path)
}

//! ZIP package access for Office Open XML documents.

use doctext_core::{Error, Result, SlideOrder};
use std::io::{Read, Seek};
use zip::result::ZipError;
use zip::ZipArchive;

/// Open a ZIP package, mapping failures to [`Error::CorruptDocument`].
pub fn open_package<R: Read + Seek>(reader: R) -> Result<ZipArchive<R>> {
    ZipArchive::new(reader).map_err(|e| Error::corrupt("Failed to open ZIP", e))
}

/// Read a part as UTF-8 text.
///
/// Returns `Ok(None)` when the package has no part with that name.
pub fn read_part<R: Read + Seek>(archive: &mut ZipArchive<R>, path: &str) -> Result<Option<String>> {
    let mut file = match archive.by_name(path) {
        Ok(file) => file,
        Err(ZipError::FileNotFound) => return Ok(None),
        Err(e) => return Err(Error::corrupt(&format!("Failed to open '{}'", path), e)),
    };

    // The declared size comes from the archive and is not trusted.
    let mut content = String::new();
    file.read_to_string(&mut content)
        .map_err(|e| Error::corrupt(&format!("Failed to read '{}'", path), e))?;

    Ok(Some(content))
}

/// List the XML parts whose name starts with `prefix`, excluding
/// relationship parts, in the requested order.
pub fn find_parts<R: Read + Seek>(
    archive: &mut ZipArchive<R>,
    prefix: &str,
    order: SlideOrder,
) -> Result<Vec<String>> {
    let mut names = Vec::new();

    // Index order is the archive's own entry order.
    for i in 0..archive.len() {
        let entry = archive
            .by_index_raw(i)
            .map_err(|e| Error::corrupt(&format!("Failed to read entry {}", i), e))?;
        let name = entry.name();
        if name.starts_with(prefix) && name.ends_with(".xml") && !name.contains("_rels") {
            names.push(name.to_string());
        }
    }

    if order == SlideOrder::Numeric {
        sort_by_part_number(&mut names);
    }

    Ok(names)
}

/// Sort part names by their trailing number, falling back to name order.
pub fn sort_by_part_number(names: &mut [String]) {
    names.sort_by(|a, b| match (part_number(a), part_number(b)) {
        (Some(na), Some(nb)) => na.cmp(&nb).then_with(|| a.cmp(b)),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => a.cmp(b),
    });
}

/// Extract the part number from a name like "ppt/slides/slide3.xml".
pub fn part_number(name: &str) -> Option<usize> {
    let stem = name.trim_end_matches(".xml");

    let digits: String = stem.chars().rev().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    let digits: String = digits.chars().rev().collect();
    digits.parse().ok()
}

/// Build an in-memory ZIP package from `(name, content)` pairs, in order.
#[cfg(test)]
pub(crate) fn build_package(entries: &[(&str, &str)]) -> Vec<u8> {
    use std::io::{Cursor, Write};
    use zip::write::FileOptions;
    use zip::ZipWriter;

    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    for (name, content) in entries {
        writer.start_file(*name, FileOptions::default()).unwrap();
        writer.write_all(content.as_bytes()).unwrap();
    }
    writer.finish().unwrap().into_inner()
}

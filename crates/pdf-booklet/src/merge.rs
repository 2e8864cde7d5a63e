//! Output merging
//!
//! Concatenates the produced single-sheet files into one booklet document.
//! The merger consumes an explicit, ordered artifact list from the assembler;
//! when collecting sheets from a directory instead, files are sorted by their
//! numeric stem — directory-listing order is never trusted.

use crate::types::{BookletError, Result};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Merge the given sheet files, in order, into one document at `output_path`.
pub fn merge_sheets(sheets: &[PathBuf], output_path: &Path) -> Result<()> {
    if sheets.is_empty() {
        return Err(BookletError::EmptyDocument);
    }

    let mut output = Document::with_version("1.7");
    let pages_id = output.new_object_id();
    let mut page_refs = Vec::new();

    for sheet_path in sheets {
        let sheet = Document::load(sheet_path).map_err(|e| BookletError::Merge {
            path: sheet_path.clone(),
            reason: e.to_string(),
        })?;

        let mut cache = HashMap::new();
        for (_, page_id) in sheet.get_pages() {
            let copied = copy_page(&mut output, &sheet, page_id, pages_id, &mut cache).map_err(
                |e| BookletError::Merge {
                    path: sheet_path.clone(),
                    reason: e.to_string(),
                },
            )?;
            page_refs.push(Object::Reference(copied));
        }
    }

    let count = page_refs.len() as i64;
    let pages_dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Kids", Object::Array(page_refs)),
        ("Count", Object::Integer(count)),
    ]);
    output.objects.insert(pages_id, Object::Dictionary(pages_dict));

    let catalog_id = output.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_id)),
    ]));
    output.trailer.set("Root", catalog_id);

    output.save(output_path)?;
    log::info!(
        "merged {} sheet files into {}",
        sheets.len(),
        output_path.display()
    );
    Ok(())
}

/// Collect `NNNN.pdf` sheet files from a directory, sorted by numeric stem.
pub fn numbered_sheets_in_dir(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut numbered = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.extension().and_then(|e| e.to_str()) != Some("pdf") {
            continue;
        }
        let number = path
            .file_stem()
            .and_then(|s| s.to_str())
            .and_then(|s| s.parse::<u32>().ok());
        if let Some(number) = number {
            numbered.push((number, path));
        }
    }

    numbered.sort_by_key(|(number, _)| *number);
    Ok(numbered.into_iter().map(|(_, path)| path).collect())
}

/// Copy one page from a sheet document into the output, rebinding it to the
/// output's pages tree.
fn copy_page(
    output: &mut Document,
    source: &Document,
    page_id: ObjectId,
    parent_id: ObjectId,
    cache: &mut HashMap<ObjectId, ObjectId>,
) -> Result<ObjectId> {
    let page_dict = source.get_dictionary(page_id)?;

    let mut new_dict = Dictionary::new();
    for (key, value) in page_dict.iter() {
        // Parent points back into the source page tree; rebind instead of
        // following the cycle.
        if key == b"Parent" {
            continue;
        }
        new_dict.set(key.clone(), copy_object_deep(output, source, value, cache)?);
    }
    new_dict.set("Parent", Object::Reference(parent_id));

    Ok(output.add_object(new_dict))
}

/// Deep copy an object from source to output document, following references.
///
/// Uses a cache to avoid copying the same object multiple times.
fn copy_object_deep(
    output: &mut Document,
    source: &Document,
    obj: &Object,
    cache: &mut HashMap<ObjectId, ObjectId>,
) -> Result<Object> {
    match obj {
        Object::Reference(id) => {
            if let Some(&new_id) = cache.get(id) {
                return Ok(Object::Reference(new_id));
            }

            let referenced = source.get_object(*id)?;
            let copied = copy_object_deep(output, source, referenced, cache)?;

            let new_id = output.add_object(copied);
            cache.insert(*id, new_id);

            Ok(Object::Reference(new_id))
        }
        Object::Dictionary(dict) => {
            let mut new_dict = Dictionary::new();
            for (key, value) in dict.iter() {
                new_dict.set(key.clone(), copy_object_deep(output, source, value, cache)?);
            }
            Ok(Object::Dictionary(new_dict))
        }
        Object::Array(arr) => {
            let new_arr: Result<Vec<_>> = arr
                .iter()
                .map(|item| copy_object_deep(output, source, item, cache))
                .collect();
            Ok(Object::Array(new_arr?))
        }
        Object::Stream(stream) => {
            let mut new_dict = Dictionary::new();
            for (key, value) in stream.dict.iter() {
                new_dict.set(key.clone(), copy_object_deep(output, source, value, cache)?);
            }
            Ok(Object::Stream(Stream {
                dict: new_dict,
                content: stream.content.clone(),
                allows_compression: stream.allows_compression,
                start_position: None,
            }))
        }
        // Primitive types: just clone
        _ => Ok(obj.clone()),
    }
}

//! Whole-file JSON array I/O.
//!
//! Files are read in full and rewritten in full; there is no temp-file rename,
//! so a crash mid-write can leave a truncated file behind.

use std::io::ErrorKind;
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use serde_json::ser::PrettyFormatter;

use crate::error::{StoreError, StoreResult};

const INDENT: &[u8] = b"    ";

/// Read a JSON array of records.
///
/// Returns `Ok(None)` when the file does not exist. Any other I/O failure,
/// a document that is not an array, or a single bad entry fails the read.
pub fn read_records<T: DeserializeOwned>(path: &Path) -> StoreResult<Option<Vec<T>>> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(StoreError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let raw: Vec<Value> = serde_json::from_slice(&bytes).map_err(|source| StoreError::Malformed {
        path: path.to_path_buf(),
        source,
    })?;

    let records = raw
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            serde_json::from_value(value).map_err(|source| StoreError::InvalidRecord {
                path: path.to_path_buf(),
                index,
                source,
            })
        })
        .collect::<StoreResult<Vec<T>>>()?;

    tracing::debug!(path = %path.display(), count = records.len(), "read records");
    Ok(Some(records))
}

/// Overwrite `path` with `records` as a four-space indented JSON array.
pub fn write_records<T: Serialize>(path: &Path, records: &[T]) -> StoreResult<()> {
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    records
        .serialize(&mut ser)
        .map_err(|source| StoreError::Encode {
            path: path.to_path_buf(),
            source,
        })?;

    std::fs::write(path, &buf).map_err(|source| StoreError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), count = records.len(), "wrote records");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::scratch_dir;

    #[derive(Debug, PartialEq, Serialize, serde::Deserialize)]
    struct Row {
        id: u32,
    }

    #[test]
    fn absent_file_reads_as_none() {
        let dir = scratch_dir();
        let path = dir.path().join("missing.json");
        assert!(read_records::<Row>(&path).unwrap().is_none());
    }

    #[test]
    fn writes_four_space_indented_array() {
        let dir = scratch_dir();
        let path = dir.path().join("rows.json");
        write_records(&path, &[Row { id: 1 }, Row { id: 2 }]).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, "[\n    {\n        \"id\": 1\n    },\n    {\n        \"id\": 2\n    }\n]");
        assert_eq!(
            read_records::<Row>(&path).unwrap(),
            Some(vec![Row { id: 1 }, Row { id: 2 }])
        );
    }

    #[test]
    fn non_array_document_is_malformed() {
        let dir = scratch_dir();
        let path = dir.path().join("object.json");
        std::fs::write(&path, r#"{"id": 1}"#).unwrap();
        assert!(matches!(
            read_records::<Row>(&path),
            Err(StoreError::Malformed { .. })
        ));

        std::fs::write(&path, "").unwrap();
        assert!(matches!(
            read_records::<Row>(&path),
            Err(StoreError::Malformed { .. })
        ));
    }

    #[test]
    fn bad_entry_reports_its_index() {
        let dir = scratch_dir();
        let path = dir.path().join("rows.json");
        std::fs::write(&path, r#"[{"id": 1}, {"id": "two"}]"#).unwrap();
        match read_records::<Row>(&path) {
            Err(StoreError::InvalidRecord { index, .. }) => assert_eq!(index, 1),
            other => panic!("expected InvalidRecord, got {other:?}"),
        }
    }

    #[test]
    fn empty_array_is_an_empty_list() {
        let dir = scratch_dir();
        let path = dir.path().join("empty.json");
        std::fs::write(&path, "[]").unwrap();
        assert_eq!(read_records::<Row>(&path).unwrap(), Some(vec![]));
    }
}

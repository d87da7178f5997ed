use crate::error::{IndexError, Result};
use crate::index::Record;
use anyhow::Context;
use std::ffi::{OsStr, OsString};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub const HEADER: [&str; 2] = ["filepath", "label"];

/// Writes the header and every record to `writer`.
///
/// The header is written explicitly so an empty table still has one.
pub fn write_records<W: Write>(records: &[Record], writer: W) -> csv::Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    writer.write_record(HEADER)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

fn staging_path(output_path: &Path) -> PathBuf {
    let mut name = OsString::from(".");
    name.push(output_path.file_name().unwrap_or(OsStr::new("dataset.csv")));
    name.push(".partial");
    output_path.with_file_name(name)
}

/// Serializes the full table to `output_path`, replacing whatever is there.
///
/// The table goes to a sibling staging file first and is renamed into place
/// once complete, so `output_path` never holds a partial table.
pub fn write_table(records: &[Record], output_path: &Path) -> Result<()> {
    let staging = staging_path(output_path);

    let written = fs::File::create(&staging)
        .map_err(csv::Error::from)
        .and_then(|file| write_records(records, std::io::BufWriter::new(file)));

    if let Err(source) = written {
        let _ = fs::remove_file(&staging);
        return Err(IndexError::Write {
            path: output_path.to_path_buf(),
            source,
        });
    }

    fs::rename(&staging, output_path).map_err(|source| {
        let _ = fs::remove_file(&staging);
        IndexError::Persist {
            path: output_path.to_path_buf(),
            source,
        }
    })
}

/// Reads a table produced by [`write_table`].
pub fn read_table(path: &Path) -> anyhow::Result<Vec<Record>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("failed to open {}", path.display()))?;

    let mut records = Vec::new();
    for result in reader.deserialize() {
        let record: Record =
            result.with_context(|| format!("malformed row in {}", path.display()))?;
        records.push(record);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn empty_table_has_header_only() {
        let mut buf = Vec::new();
        write_records(&[], &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "filepath,label\n");
    }

    #[test]
    fn fields_are_quoted_only_when_needed() {
        let records = vec![
            Record::new("raw/cardboard/box 1.jpg", "cardboard"),
            Record::new("raw/odd,name/x.jpg", "odd,name"),
        ];
        let mut buf = Vec::new();
        write_records(&records, &mut buf).unwrap();

        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "filepath,label\n\
             raw/cardboard/box 1.jpg,cardboard\n\
             \"raw/odd,name/x.jpg\",\"odd,name\"\n"
        );
    }

    #[test]
    fn written_table_reads_back() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("dataset.csv");
        let records = vec![
            Record::new("raw/plastic/p1.jpg", "plastic"),
            Record::new("raw/plastic/p2.jpg", "plastic"),
            Record::new("raw/glass/g1.jpg", "glass"),
        ];

        write_table(&records, &out).unwrap();

        assert_eq!(read_table(&out).unwrap(), records);
        assert!(!staging_path(&out).exists());
    }

    #[test]
    fn existing_output_is_overwritten() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("dataset.csv");
        fs::write(&out, "stale contents that are much longer than the new table\n").unwrap();

        write_table(&[Record::new("a/b.jpg", "a")], &out).unwrap();

        assert_eq!(
            fs::read_to_string(&out).unwrap(),
            "filepath,label\na/b.jpg,a\n"
        );
    }

    #[test]
    fn missing_parent_directory_fails_without_output() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("processed").join("dataset.csv");

        let err = write_table(&[Record::new("a/b.jpg", "a")], &out).unwrap_err();

        assert!(matches!(err, IndexError::Write { .. }));
        assert_eq!(err.path(), out);
        assert!(!out.exists());
    }
}

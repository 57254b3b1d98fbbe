//! Model persistence
//!
//! The model lives in a data directory as two postcard files: the transition
//! table, headed by its max order, and the dictionary word list. Writes go through a temporary file in
//! the same directory and are renamed into place.

use super::{RawTable, TableRecord, TransitionModel};
use crate::errors::Result;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// File name of the encoded transition table
pub const TRANSITIONS_FILE: &str = "transitions.bin";

/// File name of the encoded dictionary
pub const WORDLIST_FILE: &str = "wordlist.bin";

/// Load the model stored in `data_dir`
///
/// # Errors
///
/// Returns `SuggestError::Io` if either file cannot be read and
/// `SuggestError::DataCorrupt` if their contents are malformed.
///
/// # Examples
/// ```no_run
/// use wordgame_suggester::model::store::load_model;
///
/// let model = load_model("data").unwrap();
/// println!("Max order: {}", model.max_order());
/// ```
pub fn load_model<P: AsRef<Path>>(data_dir: P) -> Result<TransitionModel> {
    let data_dir = data_dir.as_ref();
    log::debug!("loading model from {}", data_dir.display());

    let table = fs::read(data_dir.join(TRANSITIONS_FILE))?;
    let words = fs::read(data_dir.join(WORDLIST_FILE))?;

    TransitionModel::load(&table, &words)
}

/// Write a transition table and dictionary into `data_dir`
///
/// The directory is created if needed. Existing files are replaced atomically.
///
/// # Errors
///
/// Returns `SuggestError::Io` if encoding or writing fails.
pub fn save_model<P: AsRef<Path>>(data_dir: P, table: &RawTable, words: &[String]) -> Result<()> {
    let data_dir = data_dir.as_ref();
    fs::create_dir_all(data_dir)?;

    let table_bytes =
        postcard::to_stdvec(&TableRecord::new(table)).map_err(io::Error::other)?;
    let word_bytes = postcard::to_stdvec(words).map_err(io::Error::other)?;

    write_atomic(data_dir, TRANSITIONS_FILE, &table_bytes)?;
    write_atomic(data_dir, WORDLIST_FILE, &word_bytes)?;

    log::info!(
        "wrote {} ({} bytes) and {} ({} bytes) to {}",
        TRANSITIONS_FILE,
        table_bytes.len(),
        WORDLIST_FILE,
        word_bytes.len(),
        data_dir.display()
    );
    Ok(())
}

fn write_atomic(dir: &Path, name: &str, bytes: &[u8]) -> Result<()> {
    let mut temp_file = NamedTempFile::new_in(dir)?;
    temp_file.write_all(bytes)?;
    temp_file.flush()?;
    temp_file.persist(dir.join(name)).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::SuggestError;
    use crate::test_utils::uniform_table;

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let words = vec!["CAT".to_string(), "ACT".to_string()];

        save_model(dir.path(), &uniform_table(2), &words).unwrap();
        let model = load_model(dir.path()).unwrap();

        assert_eq!(model.max_order(), 2);
        assert!(model.is_known_word("ACT"));
        assert!(!model.is_known_word("TAC"));
    }

    #[test]
    fn save_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("nested").join("data");

        save_model(&nested, &uniform_table(1), &[]).unwrap();

        assert!(nested.join(TRANSITIONS_FILE).is_file());
        assert!(nested.join(WORDLIST_FILE).is_file());
    }

    #[test]
    fn load_missing_files_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(load_model(dir.path()), Err(SuggestError::Io(_))));
    }

    #[test]
    fn load_corrupt_file_is_data_error() {
        let dir = tempfile::tempdir().unwrap();
        save_model(dir.path(), &uniform_table(1), &[]).unwrap();
        fs::write(dir.path().join(TRANSITIONS_FILE), b"not a table").unwrap();

        assert!(matches!(
            load_model(dir.path()),
            Err(SuggestError::DataCorrupt(_))
        ));
    }
}

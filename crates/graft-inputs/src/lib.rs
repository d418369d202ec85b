pub use line_index::{LineCol, LineIndex};

#[salsa::input(debug)]
pub struct File {
    #[returns(ref)]
    pub path: camino::Utf8PathBuf,
    #[returns(deref)]
    pub text: String,
}

impl File {
    /// Loads a file into the database. A missing or unreadable path yields a
    /// file with empty text rather than an error; callers check emptiness
    /// before trusting offsets into it.
    pub fn from_path(db: &dyn salsa::Database, path: camino::Utf8PathBuf) -> Self {
        let text = std::fs::read_to_string(&path).unwrap_or_default();
        Self::new(db, path, text)
    }
}

#[salsa::tracked]
impl File {
    /// Newline offsets of the text, recorded once; `line_col` resolves an
    /// offset to (line, column) by binary search over them.
    #[salsa::tracked(returns(ref), no_eq)]
    pub fn line_index(self, db: &dyn salsa::Database) -> LineIndex {
        LineIndex::new(self.text(db))
    }
}

#[cfg(test)]
mod tests {
    use salsa::DatabaseImpl;

    use super::*;

    #[test]
    fn line_index_resolves_offsets() {
        let db = DatabaseImpl::new();
        let file = File::new(&db, camino::Utf8PathBuf::from("demo.gr"), "ab\ncd".to_string());

        let index = file.line_index(&db);
        let position = index.line_col(4.into());
        assert_eq!((position.line, position.col), (1, 1));

        let position = index.line_col(0.into());
        assert_eq!((position.line, position.col), (0, 0));
    }

    #[test]
    fn missing_files_load_as_empty_text() {
        let db = DatabaseImpl::new();
        let file = File::from_path(&db, camino::Utf8PathBuf::from("/no/such/file.gr"));
        assert!(file.text(&db).is_empty());
    }
}

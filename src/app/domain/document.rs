/// Character appended to a tab title while its document has unsaved changes.
pub const MODIFIED_MARKER: char = '*';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DocumentId(pub u64);

/// Backing path and modification state of one open buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub id: DocumentId,
    file_path: Option<String>,
    is_modified: bool,
}

impl Document {
    /// A clean document, optionally bound to `path`. An empty path counts as
    /// no path at all.
    pub fn create(id: DocumentId, path: Option<String>) -> Self {
        Self {
            id,
            file_path: path.filter(|p| !p.is_empty()),
            is_modified: false,
        }
    }

    pub fn file_path(&self) -> Option<&str> {
        self.file_path.as_deref()
    }

    pub fn is_modified(&self) -> bool {
        self.is_modified
    }

    /// Returns true when this call moved the document from clean to modified.
    pub fn mark_modified(&mut self) -> bool {
        let was_clean = !self.is_modified;
        self.is_modified = true;
        was_clean
    }

    pub fn mark_saved(&mut self, new_path: Option<String>) {
        self.is_modified = false;
        if let Some(path) = new_path.filter(|p| !p.is_empty()) {
            self.file_path = Some(path);
        }
    }

    /// Point the document at a new file without touching the modified flag.
    pub fn set_file_path(&mut self, path: String) {
        self.file_path = Some(path).filter(|p| !p.is_empty());
    }
}

/// Tab title for a document named `name`: the marker is present exactly
/// when `is_modified` is set.
pub fn title_for(name: &str, is_modified: bool) -> String {
    if is_modified {
        format!("{name}{MODIFIED_MARKER}")
    } else {
        name.to_string()
    }
}

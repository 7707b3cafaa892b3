use crate::app::domain::content::TextContent;
use crate::app::domain::document::{Document, DocumentId, title_for};
use crate::app::domain::zoom::Zoom;

/// One open tab: its document record, the text it owns and its view state.
pub struct Tab<B> {
    pub document: Document,
    /// File name or placeholder, without the modified-marker.
    pub name: String,
    pub content: B,
    pub zoom: Zoom,
    pub cursor_position: i32,
}

impl<B> Tab<B> {
    pub fn id(&self) -> DocumentId {
        self.document.id
    }

    /// Displayed title; ends with the modified-marker exactly when the
    /// document is modified.
    pub fn title(&self) -> String {
        title_for(&self.name, self.document.is_modified())
    }
}

/// Ordered collection of open tabs, each owning exactly one document.
pub struct DocumentRegistry<B> {
    tabs: Vec<Tab<B>>,
    active_id: Option<DocumentId>,
    next_id: u64,
}

impl<B: TextContent> Default for DocumentRegistry<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: TextContent> DocumentRegistry<B> {
    pub fn new() -> Self {
        Self {
            tabs: Vec::new(),
            active_id: None,
            next_id: 1,
        }
    }

    fn next_document_id(&mut self) -> DocumentId {
        let id = DocumentId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Append a clean tab and make it active.
    pub fn insert(&mut self, name: &str, path: Option<String>, text: &str) -> DocumentId {
        let id = self.next_document_id();
        self.tabs.push(Tab {
            document: Document::create(id, path),
            name: name.to_string(),
            content: B::from_text(text),
            zoom: Zoom::default(),
            cursor_position: 0,
        });
        self.active_id = Some(id);
        id
    }

    /// Remove a tab by id. Activates the nearest neighbor.
    /// Releases the tab's text right away.
    pub fn remove(&mut self, id: DocumentId) -> bool {
        let idx = match self.position(id) {
            Some(i) => i,
            None => return false,
        };
        let mut tab = self.tabs.remove(idx);
        tab.content.release();

        if self.active_id == Some(id) {
            self.active_id = if self.tabs.is_empty() {
                None
            } else {
                let new_idx = idx.min(self.tabs.len() - 1);
                Some(self.tabs[new_idx].id())
            };
        }
        true
    }

    pub fn tabs(&self) -> &[Tab<B>] {
        &self.tabs
    }

    pub fn count(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn ids(&self) -> Vec<DocumentId> {
        self.tabs.iter().map(|t| t.id()).collect()
    }

    pub fn position(&self, id: DocumentId) -> Option<usize> {
        self.tabs.iter().position(|t| t.id() == id)
    }

    pub fn id_at(&self, index: usize) -> Option<DocumentId> {
        self.tabs.get(index).map(|t| t.id())
    }

    pub fn get(&self, id: DocumentId) -> Option<&Tab<B>> {
        self.tabs.iter().find(|t| t.id() == id)
    }

    pub fn get_mut(&mut self, id: DocumentId) -> Option<&mut Tab<B>> {
        self.tabs.iter_mut().find(|t| t.id() == id)
    }

    pub fn active_id(&self) -> Option<DocumentId> {
        self.active_id
    }

    pub fn active(&self) -> Option<&Tab<B>> {
        self.get(self.active_id?)
    }

    pub fn active_mut(&mut self) -> Option<&mut Tab<B>> {
        let id = self.active_id?;
        self.get_mut(id)
    }

    pub fn set_active(&mut self, id: DocumentId) -> bool {
        if self.position(id).is_some() {
            self.active_id = Some(id);
            true
        } else {
            false
        }
    }

    /// Get the next document id (for tab cycling)
    pub fn next_id_after_active(&self) -> Option<DocumentId> {
        let idx = self.position(self.active_id?)?;
        let next_idx = (idx + 1) % self.tabs.len();
        Some(self.tabs[next_idx].id())
    }

    /// Get the previous document id (for tab cycling)
    pub fn prev_id_before_active(&self) -> Option<DocumentId> {
        let idx = self.position(self.active_id?)?;
        let prev_idx = if idx == 0 { self.tabs.len() - 1 } else { idx - 1 };
        Some(self.tabs[prev_idx].id())
    }
}

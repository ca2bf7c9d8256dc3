//! File attachment tracking
//!
//! Binary evidence keyed by document label or shareholder id. Attaching
//! under an existing key replaces the previous file. Attachments are
//! session-only: they never travel through the draft store.

use std::collections::HashMap;

use uuid::Uuid;

/// What an attached file is evidence for.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AttachmentKey {
    /// A checklist document, by label.
    Document(String),
    /// The DNI of one shareholder, by id.
    Shareholder(Uuid),
}

/// A selected file: name plus raw contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachedFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// In-memory collection of attached files.
#[derive(Debug, Clone, Default)]
pub struct AttachmentSet {
    files: HashMap<AttachmentKey, AttachedFile>,
}

impl AttachmentSet {
    /// Attach a file, replacing any previous file under the same key.
    /// Returns the replaced file, if any.
    pub fn attach(&mut self, key: AttachmentKey, file: AttachedFile) -> Option<AttachedFile> {
        self.files.insert(key, file)
    }

    pub fn remove(&mut self, key: &AttachmentKey) -> Option<AttachedFile> {
        self.files.remove(key)
    }

    pub fn get(&self, key: &AttachmentKey) -> Option<&AttachedFile> {
        self.files.get(key)
    }

    pub fn has_document(&self, label: &str) -> bool {
        self.files
            .contains_key(&AttachmentKey::Document(label.to_string()))
    }

    pub fn has_shareholder(&self, id: Uuid) -> bool {
        self.files.contains_key(&AttachmentKey::Shareholder(id))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&AttachmentKey, &AttachedFile)> {
        self.files.iter()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn clear(&mut self) {
        self.files.clear();
    }
}

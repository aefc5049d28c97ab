//! The document buffer shown in the editor's text area.

/// In-memory text of the open document.
///
/// Holds whatever the user typed last, or the contents of the last
/// completed Open. There is no undo history or dirty tracking.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    text: String,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Mutable access for the text widget.
    pub fn text_mut(&mut self) -> &mut String {
        &mut self.text
    }

    /// Replace the whole buffer.
    pub fn replace(&mut self, text: String) {
        self.text = text;
    }

    /// Copy of the current contents, taken before a save dialog opens.
    pub fn snapshot(&self) -> String {
        self.text.clone()
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty() {
        let doc = Document::new();
        assert!(doc.is_empty());
        assert_eq!(doc.text(), "");
    }

    #[test]
    fn test_replace_overwrites_wholesale() {
        let mut doc = Document::new();
        doc.text_mut().push_str("typed by user");
        doc.replace("loaded".to_string());
        assert_eq!(doc.text(), "loaded");
        assert_eq!(doc.len(), 6);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut doc = Document::new();
        doc.replace("before".to_string());
        let snap = doc.snapshot();
        doc.text_mut().push_str(" after");
        assert_eq!(snap, "before");
        assert_eq!(doc.text(), "before after");
    }
}

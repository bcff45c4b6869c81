//! Data access layer for the knowledge base. The backing file is re-read on
//! every call so edits take effect without a restart.

use crate::models::chat::KnowledgeEntry;
use log::error;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum KnowledgeError {
    #[error("Failed to read knowledge base file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse knowledge base file: {0}")]
    Parse(#[from] serde_json::Error),
}

async fn read_entries(path: &Path) -> Result<Vec<KnowledgeEntry>, KnowledgeError> {
    let raw = tokio::fs::read_to_string(path).await?;
    let entries = serde_json::from_str(&raw)?;
    Ok(entries)
}

/// Loads the ordered entry list. A missing or corrupt file degrades to an
/// empty list (logged server-side) so the chat pipeline falls through to the
/// fallback reply instead of failing the request.
pub async fn load_knowledge_base<P: AsRef<Path>>(path: P) -> Vec<KnowledgeEntry> {
    let path = path.as_ref();
    match read_entries(path).await {
        Ok(entries) => entries,
        Err(e) => {
            error!("Knowledge base '{}' unavailable: {}", path.display(), e);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn loads_entries_in_file_order() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{ "keywords": ["servicios"], "answer": "Ofrecemos consultoría de software." }},
                {{ "keywords": ["contacto", "correo"], "answer": "Escríbenos a info@example.com." }}
            ]"#
        )
        .unwrap();

        let entries = load_knowledge_base(file.path()).await;
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].answer, "Ofrecemos consultoría de software.");
        assert_eq!(entries[1].keywords, vec!["contacto", "correo"]);
    }

    #[tokio::test]
    async fn missing_file_degrades_to_empty_list() {
        let entries = load_knowledge_base("does/not/exist.json").await;
        assert!(entries.is_empty());
    }

    #[tokio::test]
    async fn corrupt_file_degrades_to_empty_list() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not valid json").unwrap();

        let entries = load_knowledge_base(file.path()).await;
        assert!(entries.is_empty());
    }
}

//! Business logic of the chatbot: text normalization and keyword matching.
//!
//! Both the user message and every keyword pass through the same
//! normalization before comparison, so matching is case- and
//! accent-insensitive and embedded markup cannot reach the matcher.

use crate::knowledge;
use crate::models::chat::KnowledgeEntry;
use log::debug;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Reply used when no knowledge entry matches the message.
pub const FALLBACK_REPLY: &str = "Lo siento, no he entendido tu pregunta. \
    Puedes consultarme sobre nuestros servicios, tecnologías o información de contacto.";

/// Canonicalizes text for matching: lowercase, decompose accented characters
/// and drop the combining marks ("día" -> "dia"), then strip every character
/// that is not an ASCII letter, digit, or whitespace.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace())
        .collect()
}

/// Whole-word containment check. `needle` must already be normalized and
/// non-empty; a match is only valid when not flanked by alphanumerics, so
/// "hola" never matches inside "caracola".
fn contains_word(haystack: &str, needle: &str) -> bool {
    let mut from = 0;
    while let Some(pos) = haystack[from..].find(needle) {
        let start = from + pos;
        let end = start + needle.len();
        let open = haystack[..start]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_ascii_alphanumeric());
        let closed = haystack[end..]
            .chars()
            .next()
            .map_or(true, |c| !c.is_ascii_alphanumeric());
        if open && closed {
            return true;
        }
        from = start + 1;
    }
    false
}

/// Scans entries in storage order, keywords in declared order, and returns the
/// answer of the first entry whose keyword appears as a whole word in the
/// normalized message. First hit wins; there is no scoring.
pub fn find_reply(normalized_message: &str, entries: &[KnowledgeEntry]) -> Option<String> {
    for entry in entries {
        for keyword in &entry.keywords {
            let keyword = normalize(keyword);
            let keyword = keyword.trim();
            if !keyword.is_empty() && contains_word(normalized_message, keyword) {
                return Some(entry.answer.clone());
            }
        }
    }
    None
}

/// Full pipeline for one user message: normalize, load the knowledge base,
/// match, and fall back to the default reply when nothing hits.
pub async fn process_message(message: &str, knowledge_path: &str) -> String {
    let normalized = normalize(message);
    let entries = knowledge::load_knowledge_base(knowledge_path).await;
    debug!(
        "Matching normalized message ({} chars) against {} entries",
        normalized.len(),
        entries.len()
    );
    find_reply(&normalized, &entries).unwrap_or_else(|| FALLBACK_REPLY.to_string())
}

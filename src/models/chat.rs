use serde::{ Serialize, Deserialize };

/// One rule of the knowledge base: any of `keywords` triggers `answer`.
/// Entries have no identity beyond their position in the list; the matcher
/// resolves ties purely by storage order.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct KnowledgeEntry {
    pub keywords: Vec<String>,
    pub answer: String,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub reply: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Port for the HTTP server to listen on.
    #[arg(long, env = "PORT", default_value = "5000")]
    pub port: u16,

    /// API Key clients must supply in the `x-api-key` header. If unset, the
    /// server runs without authentication.
    #[arg(long, env = "API_KEY")]
    pub api_key: Option<String>,

    /// Path to the knowledge base JSON file (ordered list of keyword/answer entries).
    #[arg(long, env = "KNOWLEDGE_PATH", default_value = "data/knowledge_base.json")]
    pub knowledge_path: String,
}

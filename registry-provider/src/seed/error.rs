use thiserror::Error;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Seed file not found at {0}")]
    NotFound(String),

    #[error("Failed to fetch seed from '{url}': {reason}")]
    FetchError {
        url: String,
        status: Option<u16>,
        reason: String,
    },

    #[error("Failed to read seed file '{path}': {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse seed document: {reason}{}", fallback_message(.fallback))]
    ParseError {
        reason: String,
        /// Index of the first entry that is not a valid server, if the document is an array
        entry: Option<usize>,
        /// Error of the generic array decode, set only if it failed too
        fallback: Option<String>,
    },
}

fn fallback_message(fallback: &Option<String>) -> String {
    match fallback {
        Some(e) => format!(" (generic decode: {})", e),
        None => String::new(),
    }
}

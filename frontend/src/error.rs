use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomError {
    #[error("No window available")]
    NoWindow,
    #[error("No document available")]
    NoDocument,
    #[error("Document has no root element")]
    NoDocumentElement,
    #[error("Failed to attach {event} listener: {reason}")]
    Listener { event: &'static str, reason: String },
}

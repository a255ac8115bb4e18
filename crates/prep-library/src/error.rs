use thiserror::Error;

#[derive(Debug, Error)]
pub enum LibraryError {
    /// Two or more batches authored units sharing an id. An authoring
    /// defect caught before release; the collection itself still
    /// contains every unit.
    #[error("duplicate study unit ids: {}", ids.join(", "))]
    DuplicateIds { ids: Vec<String> },
}

pub type Result<T> = std::result::Result<T, LibraryError>;

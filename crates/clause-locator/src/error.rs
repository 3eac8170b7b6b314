use thiserror::Error;

/// Internal locate failures. These never escape the public operations;
/// they are logged and absorbed at the API boundary.
#[derive(Error, Debug)]
pub enum LocateError {
    #[error("no match for any search variant of {query:?}")]
    NoMatch { query: String },

    #[error("document viewer is not attached")]
    ViewerUnavailable,
}

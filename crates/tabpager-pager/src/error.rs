//! Pager error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PagerError {
    #[error("Page count mismatch: {tabs} tabs but {pages} pages")]
    CountMismatch { tabs: usize, pages: usize },
}

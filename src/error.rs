#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ListError {
    #[error("Index {index} out of range for list of length {len}.")]
    IndexOutOfRange { index: i128, len: usize },

    #[error("Count {count} out of range for list of length {len}.")]
    CountOutOfRange { count: i128, len: usize },

    #[error("List is absent.")]
    AbsentList,
}

impl ListError {
    pub(crate) fn new_index_out_of_range(index: Option<i128>, len: usize) -> Self {
        ListError::IndexOutOfRange {
            index: index.unwrap_or(i128::MAX),
            len,
        }
    }

    pub(crate) fn new_count_out_of_range(count: Option<i128>, len: usize) -> Self {
        ListError::CountOutOfRange {
            count: count.unwrap_or(i128::MAX),
            len,
        }
    }
}

pub type Result<T> = std::result::Result<T, ListError>;

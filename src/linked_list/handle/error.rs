use core::ffi::c_int;
use core::fmt;

/// Errors returned by [`HandleList`](super::HandleList) operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListError {
    /// A required argument was null.
    ///
    /// The Rust API cannot express a null list, value or handle, so this is
    /// only produced at the C ABI boundary.
    InvalidArgument,
    /// The allocator could not provide memory for a list or a node.
    AllocationFailure,
    /// The handle does not identify a node currently linked into the list.
    NotFound,
}

impl ListError {
    /// The non-zero status code reported for this error over the C ABI.
    pub const fn code(self) -> c_int {
        match self {
            ListError::InvalidArgument => 1,
            ListError::AllocationFailure => 2,
            ListError::NotFound => 3,
        }
    }
}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListError::InvalidArgument => f.write_str("invalid argument: a required pointer was null"),
            ListError::AllocationFailure => f.write_str("allocation failure"),
            ListError::NotFound => f.write_str("item not found in list"),
        }
    }
}

impl core::error::Error for ListError {}

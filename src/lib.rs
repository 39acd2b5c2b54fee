//! Higher-order helpers over ordered lists: iterating, selecting, accessing
//! by position, and in-place modification.
//!
//! The operations come in two shapes with identical behaviour: bound
//! handles ([`ListView`] for reading, [`ListHelper`] for modifying) and the
//! free functions in [`list`], which take the list as their first argument.

pub mod error;
mod helper;
pub mod list;
mod util;
mod view;

pub use error::{ListError, Result};
pub use helper::ListHelper;
pub use view::ListView;

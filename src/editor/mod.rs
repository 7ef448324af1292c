mod buffer;
mod editor;

pub use buffer::Buffer;
pub use editor::{Cursor, Editor};

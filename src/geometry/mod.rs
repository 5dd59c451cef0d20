pub mod position;
pub mod rect;
pub mod rect_extensions;

pub use position::Position;
pub use rect::Rect;

pub mod board;
pub mod card;
pub mod column;
pub mod id;
pub mod ordering;

pub use board::Board;
pub use card::{Card, CardUpdate};
pub use column::{Column, WipStatus};
pub use id::{BoardId, CardId, ColumnId};

pub mod bookmarks;
pub mod history;
pub mod parse;
pub mod render;
pub mod templates;
pub mod use_template;

pub use bookmarks::*;
pub use history::*;
pub use parse::*;
pub use render::*;
pub use templates::*;
pub use use_template::*;

pub mod boxed_paragraph;
pub mod kv_line;
pub mod module_info;

pub use boxed_paragraph::render_boxed_paragraph;
pub use kv_line::{kv_pairs_to_lines, render_kv_line};
pub use module_info::{render_module_info, MODULE_INFO_HEIGHT};

pub mod unescape;

pub use unescape::unescape_char_refs;

pub mod case_map;
pub mod hashed;

pub use case_map::CaseInsensitiveMap;
pub use hashed::HashableMap;

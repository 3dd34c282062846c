pub mod scan;

pub use scan::{collect_entry_paths, load_skip_list, write_path_list};

pub mod paths;
pub mod search;

pub use paths::collect_paths;
pub use search::find_key;

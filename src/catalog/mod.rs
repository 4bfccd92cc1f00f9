mod persistence;
mod table;

pub use persistence::{load_catalog, save_catalog};
pub use table::{BUILTIN_CATALOG, FUZZY_MATCH_THRESHOLD, FoodCatalog, MAX_SUGGESTIONS};

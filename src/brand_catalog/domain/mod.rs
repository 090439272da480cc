pub mod brand;
pub mod catalog;
pub mod category;
pub mod serial_prefix;

pub use brand::{BrandEntry, BrandId, BrandRecord};
pub use catalog::{Catalog, PrefixEntry};
pub use category::Category;
pub use serial_prefix::SerialPrefix;

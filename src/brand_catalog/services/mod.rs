pub mod brand_search;
pub mod collision_auditor;
pub mod serial_detector;

pub use brand_search::{search, BrandFilter};
pub use collision_auditor::{find_prefix_collisions, PrefixCollision};
pub use serial_detector::{detect_from_serial, normalize_serial, Detection, SerialDetector};

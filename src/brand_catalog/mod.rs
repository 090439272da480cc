//! Brand catalog domain: records, the catalog itself, and the pure
//! lookup services (search, serial detection, prefix audit).

pub mod domain;
pub mod policies;
pub mod services;

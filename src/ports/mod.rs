/// Ports layer - Interfaces between the application core and infrastructure
pub mod outbound;

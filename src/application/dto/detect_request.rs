use crate::brand_catalog::policies::MatchPolicy;

/// DetectRequest - request DTO for serial number detection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectRequest {
    /// Serial as typed or scanned; normalization happens in the detector
    pub serial: String,
    pub policy: MatchPolicy,
}

impl DetectRequest {
    pub fn new(serial: impl Into<String>, policy: MatchPolicy) -> Self {
        Self {
            serial: serial.into(),
            policy,
        }
    }
}

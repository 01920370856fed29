
pub mod constants;

/// GPS L1 C/A spreading codes
pub mod gps_l1_ca;

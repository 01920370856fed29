
use std::fmt;

pub mod gnss;
pub mod lfsr;
pub mod utils;

pub use crate::gnss::gps_l1_ca::signal_modulation::{ca_code_gen, CaCode};
pub use crate::lfsr::{lfsr, Lfsr};

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CodeGenErr {
	InvalidSvId(usize),
	MalformedLfsrConfig(&'static str),
	InvalidBitSlice(&'static str),
}

impl fmt::Display for CodeGenErr {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			CodeGenErr::InvalidSvId(sv)          => write!(f, "invalid SV id {}, expected 1 to 32", sv),
			CodeGenErr::MalformedLfsrConfig(msg) => write!(f, "malformed LFSR configuration: {}", msg),
			CodeGenErr::InvalidBitSlice(msg)     => write!(f, "invalid bit slice: {}", msg),
		}
	}
}

impl std::error::Error for CodeGenErr {}

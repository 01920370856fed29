
use std::fmt;

use serde::{Serialize, Deserialize};

use crate::CodeGenErr;

pub mod signal_modulation;


#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodePreview {
	pub prn:usize,
	pub chips:Vec<i8>,
	pub first_ten_octal:u16,
}

impl CodePreview {

	pub fn new(prn:usize, num_chips:usize) -> Result<Self, CodeGenErr> {
		let chips:Vec<i8> = signal_modulation::ca_code_gen(prn)?.take(num_chips).collect();
		let first_ten_octal:u16 = signal_modulation::first_chips_octal(prn)?;
		Ok(Self{ prn, chips, first_ten_octal })
	}

	pub fn octal_str(&self) -> String { format!("{:04o}", self.first_ten_octal) }

}

impl fmt::Display for CodePreview {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "SV PRN: {:>2}, first {} chips: {:?}", self.prn, self.chips.len(), self.chips)
	}
}

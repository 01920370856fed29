
use crate::CodeGenErr;
use crate::gnss::constants::gps;
use crate::lfsr::Lfsr;
use crate::utils::bits_to_int;

// G1: all ones, feedback from stages 3 and 10 (x^10 + x^3 + 1)
pub const G1_INITIAL_STATE:[u8; 10] = [1; 10];
pub const G1_TAPS:[u8; 10] = [0, 0, 1, 0, 0, 0, 0, 0, 0, 1];

// G2: feedback from stages 2, 3, 6, 8, 9 and 10 (x^10 + x^9 + x^8 + x^6 + x^3 + x^2 + 1)
pub const G2_TAPS:[u8; 10] = [0, 1, 1, 0, 0, 1, 0, 1, 1, 1];

// G2 register contents that put the G2 sequence at each PRN's code phase delay
pub const G2_INITIAL_STATE:[[u8; 10]; 32] = [
	[1, 1, 1, 1, 1, 0, 1, 1, 0, 0],	// PRN 01
	[1, 1, 1, 1, 0, 1, 1, 0, 0, 0],	// PRN 02
	[1, 1, 1, 0, 1, 1, 0, 0, 0, 0],	// PRN 03
	[1, 1, 0, 1, 1, 0, 0, 0, 0, 0],	// PRN 04
	[0, 0, 1, 0, 0, 1, 0, 1, 1, 0],	// PRN 05
	[0, 1, 0, 0, 1, 0, 1, 1, 0, 0],	// PRN 06
	[0, 1, 1, 0, 0, 1, 0, 1, 1, 0],	// PRN 07
	[1, 1, 0, 0, 1, 0, 1, 1, 0, 0],	// PRN 08
	[1, 0, 0, 1, 0, 1, 1, 0, 0, 0],	// PRN 09
	[1, 1, 0, 1, 1, 1, 0, 1, 0, 0],	// PRN 10
	[1, 0, 1, 1, 1, 0, 1, 0, 0, 0],	// PRN 11
	[1, 1, 1, 0, 1, 0, 0, 0, 0, 0],	// PRN 12
	[1, 1, 0, 1, 0, 0, 0, 0, 0, 0],	// PRN 13
	[1, 0, 1, 0, 0, 0, 0, 0, 0, 0],	// PRN 14
	[0, 1, 0, 0, 0, 0, 0, 0, 0, 0],	// PRN 15
	[1, 0, 0, 0, 0, 0, 0, 0, 0, 0],	// PRN 16
	[1, 0, 0, 0, 1, 0, 0, 1, 1, 0],	// PRN 17
	[0, 0, 0, 1, 0, 0, 1, 1, 0, 0],	// PRN 18
	[0, 0, 1, 0, 0, 1, 1, 0, 0, 0],	// PRN 19
	[0, 1, 0, 0, 1, 1, 0, 0, 0, 0],	// PRN 20
	[1, 0, 0, 1, 1, 0, 0, 0, 0, 0],	// PRN 21
	[0, 0, 1, 1, 0, 0, 0, 0, 0, 0],	// PRN 22
	[0, 0, 1, 1, 0, 0, 1, 1, 1, 0],	// PRN 23
	[1, 0, 0, 1, 1, 1, 0, 0, 0, 0],	// PRN 24
	[0, 0, 1, 1, 1, 0, 0, 0, 0, 0],	// PRN 25
	[0, 1, 1, 1, 0, 0, 0, 0, 0, 0],	// PRN 26
	[1, 1, 1, 0, 0, 0, 0, 0, 0, 0],	// PRN 27
	[1, 1, 0, 0, 0, 0, 0, 0, 0, 0],	// PRN 28
	[0, 0, 0, 1, 0, 1, 0, 1, 1, 0],	// PRN 29
	[0, 0, 1, 0, 1, 0, 1, 1, 0, 0],	// PRN 30
	[0, 1, 0, 1, 0, 1, 1, 0, 0, 0],	// PRN 31
	[1, 0, 1, 0, 1, 1, 0, 0, 0, 0],	// PRN 32
	];

/// Infinite C/A chip sequence for one PRN.  Each chip is -1 or +1 and the sequence repeats
/// every 1023 chips.
#[derive(Debug, Clone)]
pub struct CaCode {
	prn: usize,
	g1: Lfsr,
	g2: Lfsr,
}

impl CaCode {

	pub fn new(prn:usize) -> Result<Self, CodeGenErr> {
		if prn >= 1 && prn <= gps::NUM_PRNS {
			let g1 = Lfsr::new(&G1_INITIAL_STATE, &G1_TAPS)?;
			let g2 = Lfsr::new(&G2_INITIAL_STATE[prn-1], &G2_TAPS)?;
			Ok(Self{ prn, g1, g2 })
		} else {
			Err(CodeGenErr::InvalidSvId(prn))
		}
	}

	pub fn prn(&self) -> usize { self.prn }

	pub fn next_chip(&mut self) -> i8 {
		let asymmetric:u8 = self.g1.shift() ^ self.g2.shift();
		if asymmetric == 1 { 1 } else { -1 }
	}

}

impl Iterator for CaCode {
	type Item = i8;

	fn next(&mut self) -> Option<i8> { Some(self.next_chip()) }
}

pub fn ca_code_gen(sv:usize) -> Result<CaCode, CodeGenErr> { CaCode::new(sv) }

pub fn chip_to_bit(chip:i8) -> u8 { if chip == 1 { 1 } else { 0 } }

/// One full code period, 1023 chips
pub fn prn_int(prn:usize) -> Result<Vec<i8>, CodeGenErr> {
	Ok(ca_code_gen(prn)?.take(gps::CODE_LENGTH).collect())
}

pub fn prn_bits(prn:usize) -> Result<Vec<u8>, CodeGenErr> {
	Ok(prn_int(prn)?.into_iter().map(chip_to_bit).collect())
}

/// First ten chips packed MSB first, the form IS-GPS-200 Table 3-Ia lists in octal
pub fn first_chips_octal(prn:usize) -> Result<u16, CodeGenErr> {
	let bits:Vec<u8> = ca_code_gen(prn)?.take(10).map(chip_to_bit).collect();
	bits_to_int::to_u16(&bits)
}

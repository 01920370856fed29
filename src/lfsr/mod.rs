
use crate::CodeGenErr;


pub const REGISTER_LEN:usize = 10;

/* Fibonacci-style shift register.  Each shift XORs the tapped stages into a feedback bit, pushes
that bit in at stage 0 and shifts the last stage out as the output.  Stage 0 of the seed and tap
slices is the front of the register, stage 9 is the output end. */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lfsr {
	state: [u8; REGISTER_LEN],
	taps: [u8; REGISTER_LEN],
}

fn to_register(bits:&[u8], len_err:&'static str, value_err:&'static str) -> Result<[u8; REGISTER_LEN], CodeGenErr> {
	if bits.len() != REGISTER_LEN {
		return Err(CodeGenErr::MalformedLfsrConfig(len_err));
	}
	if bits.iter().any(|b| *b > 1) {
		return Err(CodeGenErr::MalformedLfsrConfig(value_err));
	}

	let mut reg:[u8; REGISTER_LEN] = [0; REGISTER_LEN];
	reg.copy_from_slice(bits);
	Ok(reg)
}

impl Lfsr {

	/// The seed is copied, so the caller's buffer is never touched by shifting.
	pub fn new(seed:&[u8], taps:&[u8]) -> Result<Self, CodeGenErr> {
		let state = to_register(seed, "seed.len() != 10 in Lfsr::new", "seed holds a value other than 0 or 1 in Lfsr::new")?;
		let taps  = to_register(taps, "taps.len() != 10 in Lfsr::new", "taps holds a value other than 0 or 1 in Lfsr::new")?;
		Ok(Self{ state, taps })
	}

	pub fn state(&self) -> &[u8; REGISTER_LEN] { &self.state }
	pub fn taps(&self) -> &[u8; REGISTER_LEN] { &self.taps }

	pub fn feedback(&self) -> u8 {
		self.state.iter().zip(self.taps.iter())
			.filter(|(_, tap)| **tap == 1)
			.fold(0u8, |acc, (bit, _)| acc ^ bit)
	}

	pub fn shift(&mut self) -> u8 {
		let feedback:u8 = self.feedback();
		let current_output:u8 = self.state[REGISTER_LEN-1];

		self.state.rotate_right(1);
		self.state[0] = feedback;

		current_output
	}

}

impl Iterator for Lfsr {
	type Item = u8;

	fn next(&mut self) -> Option<u8> { Some(self.shift()) }
}

pub fn lfsr(seed:&[u8], taps:&[u8]) -> Result<Lfsr, CodeGenErr> { Lfsr::new(seed, taps) }

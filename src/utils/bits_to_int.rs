
use crate::CodeGenErr;

fn pack(bits:&[u8], max_len:usize, len_err:&'static str) -> Result<u64, CodeGenErr> {
	let n = bits.len();
	if n > max_len {
		Err(CodeGenErr::InvalidBitSlice(len_err))
	} else if bits.iter().any(|b| *b > 1) {
		Err(CodeGenErr::InvalidBitSlice("bits holds a value other than 0 or 1 in bits_to_int"))
	} else {
		Ok(bits.iter().fold(0u64, |acc, b| (acc << 1) | (*b as u64)))
	}
}

/// MSB first
pub fn to_u16(bits:&[u8]) -> Result<u16, CodeGenErr> {
	pack(bits, 16, "bits.len() > 16 in bits_to_int::to_u16").map(|x| x as u16)
}

pub fn to_u32(bits:&[u8]) -> Result<u32, CodeGenErr> {
	pack(bits, 32, "bits.len() > 32 in bits_to_int::to_u32").map(|x| x as u32)
}

#[test]
fn test_to_u16() {
	assert_eq!(to_u16(&[]), Ok(0));
	assert_eq!(to_u16(&[1, 1, 0, 0, 1, 0, 0, 0, 0, 0]), Ok(0o1440));
	assert_eq!(to_u16(&[1; 16]), Ok(0xFFFF));
	assert!(to_u16(&[1; 17]).is_err());
	assert!(to_u16(&[1, 2]).is_err());
}

#[test]
fn test_to_u32() {
	assert_eq!(to_u32(&[1, 0, 1, 1]), Ok(11));
	assert_eq!(to_u32(&[1; 32]), Ok(0xFFFF_FFFF));
	assert!(to_u32(&[0; 33]).is_err());
}

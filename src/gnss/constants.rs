
pub mod gps {

	// IS-GPS-200, Section 3.3.2.1
	pub const CODE_LENGTH:usize = 1023;
	pub const CHIPS_PER_SEC:f64 = 1.023e6;
	pub const SEC_PER_CHIP:f64 = 1.0 / CHIPS_PER_SEC;
	pub const CODE_PERIOD_SEC:f64 = (CODE_LENGTH as f64) * SEC_PER_CHIP;

	pub const NUM_PRNS:usize = 32;

}

#[test]
fn code_period_is_one_millisecond() {
	assert!((gps::CODE_PERIOD_SEC - 1.0e-3).abs() < 1.0e-12);
}

pub mod bits_to_int;

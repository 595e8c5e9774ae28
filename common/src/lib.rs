pub mod grid;
pub mod input;
pub mod math;
pub mod xyz;

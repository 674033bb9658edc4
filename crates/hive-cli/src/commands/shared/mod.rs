pub mod filter;
pub mod submit;

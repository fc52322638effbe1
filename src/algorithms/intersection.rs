pub mod bentley_ottmann;
pub mod naive;

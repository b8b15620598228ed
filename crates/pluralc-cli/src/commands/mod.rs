pub mod compile;
pub mod convert;
pub mod lookup;

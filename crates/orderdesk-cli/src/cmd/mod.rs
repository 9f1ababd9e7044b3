pub mod check;
pub mod hash;
pub mod serve;
pub mod token;

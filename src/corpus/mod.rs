pub mod pairing;
pub mod strip;
pub mod types;

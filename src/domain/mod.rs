pub mod cage;
pub mod dinosaur;
pub mod errors;
pub mod policy;

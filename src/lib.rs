pub mod alphabet;
pub mod caesar;
pub mod config;
pub mod consts;
pub mod cracker;
pub mod error;
pub mod friedman;
pub mod kasiski;
pub mod profile;
pub mod transform;
pub mod vigenere;
// cmd and reports are binary modules (declared in main.rs).

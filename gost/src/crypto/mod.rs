pub mod error;
pub mod f_function;
pub mod gost;
pub mod key;
pub mod key_schedule;
pub mod sboxes;

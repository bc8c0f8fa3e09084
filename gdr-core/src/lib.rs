pub mod country_code;
pub mod error;
pub mod gender;
pub mod layout;

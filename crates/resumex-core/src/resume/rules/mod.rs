//! Rule-based field extractors for resume text.

pub mod email;
pub mod name;
pub mod patterns;
pub mod phone;

pub use email::extract_email;
pub use name::extract_name;
pub use phone::extract_phone;

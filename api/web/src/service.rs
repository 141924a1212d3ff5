pub mod contact;
pub mod project;
pub mod resume;
pub mod root;

pub mod entities;
pub mod errors;
pub mod query;
pub mod validation;
pub mod value_objects;

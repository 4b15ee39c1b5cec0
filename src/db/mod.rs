pub mod contacts;
pub mod schema;
pub mod sign_ups;

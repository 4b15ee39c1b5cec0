mod contact;
mod sign_up;

pub use contact::{ContactSubmission, NewContact};
pub use sign_up::{NewSignUp, SignUpForm};

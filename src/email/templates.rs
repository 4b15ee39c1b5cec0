use chrono::{DateTime, Utc};

use crate::models::{ContactSubmission, SignUpForm};

pub const SIGN_UP_REPLY_SUBJECT: &str = "Thank You for Signing Up!";
pub const SIGN_UP_ADMIN_SUBJECT: &str = "New Sign-Up Form Received";
pub const CONTACT_REPLY_SUBJECT: &str = "Thank You for contacting us!";
pub const CONTACT_ADMIN_SUBJECT: &str = "New Contact Form submission";

pub fn render_sign_up_reply(first_name: &str) -> String {
    format!(
        "Hello {first_name},\n\n\
         Thank you for signing up with Iron Wing Dispatching. We will contact you shortly.\n\n\
         All the best,\nIron Wing Dispatching Team"
    )
}

pub fn render_sign_up_admin(form: &SignUpForm) -> String {
    format!(
        "A new sign-up form has been received!\n\n\
         Name: {} {}\n\
         Email: {}\n\
         Phone: {}\n\
         Fleet Size: {}\n\
         Trailer Type: {}\n\
         Plan Selected: {}\n\n\
         Submitted At: {}",
        form.first_name,
        form.last_name,
        form.email,
        form.phone,
        form.fleet_size,
        form.trailer_type,
        form.plan,
        format_timestamp(form.submitted_at),
    )
}

pub fn render_contact_reply() -> String {
    "Hello,\n\n\
     Thank you for contacting Iron Wing Dispatching. We will reach out soon.\n\n\
     All the best,\nIron Wing Dispatching Team"
        .to_string()
}

pub fn render_contact_admin(submission: &ContactSubmission) -> String {
    format!(
        "A visitor submitted a question!\n\n\
         Email: {}\n\
         Phone: {}\n\
         Message: {}\n\n\
         Submitted At: {}",
        submission.email,
        submission.phone.as_deref().unwrap_or("-"),
        submission.message,
        format_timestamp(submission.submitted_at),
    )
}

fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

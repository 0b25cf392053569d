//! Page components for the Personal Finance Survey.

mod landing;
mod login;
mod survey;
mod thank_you;

pub use landing::Landing;
pub use login::Login;
pub use survey::Survey;
pub use thank_you::ThankYou;

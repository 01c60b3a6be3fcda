mod message_box;
mod spinner;

pub use message_box::{MessageBox, Severity};
pub use spinner::LoadingSpinner as Spinner;

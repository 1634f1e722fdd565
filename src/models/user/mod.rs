mod types;

pub use self::types::{role_label, DevRole, Lawyer, Responsible, User};

pub mod create;
pub mod delete;
pub mod edit;
pub mod list;

pub use self::create::{create, new_form};
pub use self::delete::{delete, DeleteForm};
pub use self::edit::{edit_form, update};
pub use self::list::list;

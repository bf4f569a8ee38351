pub mod document;
pub mod food;
pub mod request;
pub mod user;

pub use document::*;
pub use food::*;
pub use request::*;
pub use user::*;

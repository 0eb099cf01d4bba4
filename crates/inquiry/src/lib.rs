//! Property inquiries: the request model, the email renderer, the delivery
//! service and the client-side form controller.

mod form;
mod render;
mod request;
mod service;

pub use form::*;
pub use render::*;
pub use request::*;
pub use service::*;

pub mod catalog;
pub mod responder;

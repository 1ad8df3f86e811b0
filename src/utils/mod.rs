pub mod build_state;
pub mod comment;
pub mod participant;
pub mod pullrequest;
pub mod user;

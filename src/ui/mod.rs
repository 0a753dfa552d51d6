//! Screen controllers and the terminal front end.

pub mod home;
pub mod login;
pub mod mvi;
pub mod runtime;
pub mod scope;
pub mod splash;

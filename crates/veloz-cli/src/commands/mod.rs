pub mod clients;
pub mod dashboard;
pub mod dispatch;
pub mod orders;
pub mod route;
pub mod session;
pub mod settings;
pub mod shared;

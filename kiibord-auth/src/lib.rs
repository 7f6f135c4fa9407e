//! Sign-in flow of the KIIBORD tournament client: login, registration and one-time code
//! verification screens, their validation rules and the services they delegate to.

pub mod config;
pub mod router;
pub mod services;
pub mod state;
pub mod validation;
mod views;

pub use config::FlowConfig;
pub use state::{Msg as Message, State};

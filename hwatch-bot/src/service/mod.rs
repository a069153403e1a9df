//! Service layer
//!
//! Services contain the business logic of a poll cycle: checking the shape
//! of a response, turning a homework record into an operator message and
//! delivering that message without ever failing the cycle.

mod interpreter;
mod notifier;
mod validator;

pub use interpreter::interpret_status;
pub use notifier::{Notifier, startup_message};
pub use validator::validate_response;

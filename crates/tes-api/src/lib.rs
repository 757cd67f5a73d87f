//! Boundary between an external transport and the TES records.
//!
//! A transport hands the operation name and the raw request body to a
//! [`Dispatcher`]; the body is constructed into the matching request record
//! (the only input validation), passed to an [`ApiHandler`], and the
//! response record comes back as JSON text.

mod error;
pub use error::{ApiError, ErrorBody};

mod operation;
pub use operation::Operation;

mod handler;
pub use handler::ApiHandler;

mod dispatch;
pub use dispatch::{Dispatcher, decode_request};

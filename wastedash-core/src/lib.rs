// Core library for the waste management dashboard
// HTTP types, routing, the hyper server loop and the ambient logging setup

pub mod application;
pub mod error;
pub mod form;
pub mod http;
pub mod logging;
pub mod routing;
pub mod static_assets;
pub mod status;

// Re-export commonly used types
pub use application::*;
pub use error::*;
pub use form::*;
pub use http::*;
pub use routing::{ErrorHandlerFn, HandlerFn, Route, Router, error_handler, handler};
pub use static_assets::StaticAssets;
pub use status::*;

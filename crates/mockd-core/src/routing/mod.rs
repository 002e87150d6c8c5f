//! Request dispatch: router table and route compilation.

pub mod compile;
pub mod router;

pub use compile::{build_router, compile, write_canned};
pub use router::{Handler, RouteKey, Router};

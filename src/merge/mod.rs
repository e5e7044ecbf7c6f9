//! Merge engine
//!
//! Two-phase pattern:
//! 1. Request - build the `MergeHttpRequest` (pure, testable)
//! 2. Execute - send it and classify the response (effectful)

mod execute;
mod request;

pub use execute::{MergeInvoker, execute_merge, interpret_response};
pub use request::{ACCEPT_MEDIA_TYPE, MergeHttpRequest, build_merge_request};

// Adapters layer: the ways callers reach the classifier (in-process, HTTP, function handler).

pub mod endpoint;
pub mod local;
pub mod remote;

//! Cloneview engine: clone-service HTTP client and sandboxed preview markup.
mod engine;
mod preview;
mod service;
mod types;

pub use engine::EngineHandle;
pub use preview::{render_frame, render_host_page, FRAME_HEIGHT_PX, FRAME_SANDBOX};
pub use service::{CloneService, HttpCloneService, ServiceSettings, DEFAULT_ENDPOINT};
pub use types::{CloneReply, EngineEvent, RequestId, ServiceError};

//! Cloneview core: pure request/render state machine and view-model helpers.
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::{Msg, RequestOutcome};
pub use state::{
    AppState, RequestId, RequestPhase, MISSING_HTML_FALLBACK, TRANSPORT_ERROR_FALLBACK,
};
pub use update::update;
pub use view_model::AppViewModel;

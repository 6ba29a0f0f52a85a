use crate::view_model::AppViewModel;

pub type RequestId = u64;

/// Fallback markup stored when the service reply has no `html` field.
pub const MISSING_HTML_FALLBACK: &str = "<p>Failed to load HTML.</p>";

/// Fallback markup stored when the request fails at the transport level.
pub const TRANSPORT_ERROR_FALLBACK: &str = "<p>An error occurred while cloning the website.</p>";

/// Lifecycle of the (single) clone request modeled by the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestPhase {
    #[default]
    Idle,
    Pending,
    Done,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    url_input: String,
    phase: RequestPhase,
    rendered_content: String,
    next_request_id: RequestId,
    latest_request_id: Option<RequestId>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            url_input: self.url_input.clone(),
            loading: self.phase == RequestPhase::Pending,
            preview: if self.rendered_content.is_empty() {
                None
            } else {
                Some(self.rendered_content.clone())
            },
            dirty: self.dirty,
        }
    }

    pub fn url_input(&self) -> &str {
        &self.url_input
    }

    pub fn phase(&self) -> RequestPhase {
        self.phase
    }

    pub fn rendered_content(&self) -> &str {
        &self.rendered_content
    }

    /// The id handed out by the most recent submission, if any.
    pub fn latest_request_id(&self) -> Option<RequestId> {
        self.latest_request_id
    }

    pub(crate) fn set_url_input(&mut self, text: String) {
        if self.url_input != text {
            self.url_input = text;
            self.mark_dirty();
        }
    }

    /// Starts a new request: clears any previous content, enters `Pending`,
    /// and allocates a fresh request id.
    pub(crate) fn begin_request(&mut self) -> RequestId {
        self.rendered_content.clear();
        self.phase = RequestPhase::Pending;
        self.next_request_id += 1;
        let id = self.next_request_id;
        self.latest_request_id = Some(id);
        self.mark_dirty();
        id
    }

    /// Applies a settlement. Settlements always win, even when they belong to
    /// a request that has since been superseded (last-write-wins).
    pub(crate) fn apply_settled(&mut self, content: String) {
        self.rendered_content = content;
        self.phase = RequestPhase::Done;
        self.mark_dirty();
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Returns whether a re-render is needed and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub url_input: String,
    /// True while a request is in flight; drives the loading indicator.
    pub loading: bool,
    /// Markup to hand to the preview renderer, or `None` to render nothing.
    pub preview: Option<String>,
    pub dirty: bool,
}

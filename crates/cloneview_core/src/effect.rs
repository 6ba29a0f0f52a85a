#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    SubmitClone {
        request_id: crate::RequestId,
        url: String,
    },
}

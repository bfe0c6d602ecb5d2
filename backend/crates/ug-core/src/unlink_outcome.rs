/// Successful unlink result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnlinkOutcome {
    pub user_id: String,
    pub identity_id: String,
    pub message: String,
}

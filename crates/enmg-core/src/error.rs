use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("malformed condition '{condition}': {reason}")]
    MalformedCondition { condition: String, reason: String },

    #[error("malformed parameter path '{0}': expected '<test>.<param>'")]
    MalformedParameterPath(String),

    #[error("unknown importance '{0}': expected 'high' or 'medium'")]
    UnknownImportance(String),
}

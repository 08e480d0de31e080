use thiserror::Error;

#[derive(Error, Debug, Eq, PartialEq)]
pub enum SeqErr {
    #[error("[Index] Index `{index}` out of range")]
    IndexOutOfRange { index: usize },

    #[error("[Slice] Invalid step `{step}`: the step must be a positive integer")]
    InvalidStep { step: i64 },

    #[error("[Pattern] Invalid pattern `{pattern}`: {err}")]
    BadPattern { pattern: String, err: String },

    #[error("[Pattern] Unknown regex flag `{flag}`")]
    UnknownFlag { flag: char },

    #[error("[Replace] Got {patterns} patterns but {substitutions} substitutions: \
             give exactly one substitution per pattern, or a single shared one")]
    SubstitutionMismatch { patterns: usize, substitutions: usize },

    #[error("[Find] `{value}` is not in the slice")]
    NotFound { value: String },

    #[error("[Map] Row #{index} has length {len}; 2 is required")]
    RowLength { index: usize, len: usize },
}

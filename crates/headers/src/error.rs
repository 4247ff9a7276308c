use thiserror::Error;

use crate::handle::TransferOpt;

#[derive(Debug, Error)]
pub enum HeaderError {
    #[error("building header list failed: {source}")]
    Build {
        #[from]
        source: AppendError,
    },

    #[error("attaching header list failed: {source}")]
    Attach {
        #[from]
        source: OptionError,
    },
}

#[derive(Error, Debug)]
pub enum AppendError {
    #[error("list entry contains an interior nul byte at position {position}")]
    InteriorNul { position: usize },
}

impl AppendError {
    pub fn interior_nul(position: usize) -> Self {
        Self::InteriorNul { position }
    }
}

#[derive(Error, Debug)]
pub enum OptionError {
    #[error("native handle rejected option {option}: {reason}")]
    Rejected { option: TransferOpt, reason: String },

    #[error("option {option} is not supported by this handle")]
    Unsupported { option: TransferOpt },
}

impl OptionError {
    pub fn rejected<S: ToString>(option: TransferOpt, reason: S) -> Self {
        Self::Rejected { option, reason: reason.to_string() }
    }

    pub fn unsupported(option: TransferOpt) -> Self {
        Self::Unsupported { option }
    }
}

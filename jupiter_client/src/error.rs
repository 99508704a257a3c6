use error_stack::{AttachmentKind, FrameKind, Report};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type ClientResult<T> = error_stack::Result<T, Error>;

#[derive(Error, Debug, Serialize, Deserialize, Clone, PartialEq)]
pub enum Error {
    #[error("Encoding error")]
    EncodingError,

    #[error("Transport error")]
    TransportError,

    #[error("Unexpected status code: {status}")]
    UnexpectedStatus { status: u16, body: String },

    #[error("Decode error: {0}")]
    DecodeError(String),

    #[error("Config error: {0}")]
    ConfigError(String),
}

pub trait ReportDisplayExt {
    fn format(&self) -> String;
}

impl ReportDisplayExt for Report<Error> {
    /// Printable attachments, newest first, joined with ` | `.
    fn format(&self) -> String {
        self.frames()
            .filter_map(|frame| match frame.kind() {
                FrameKind::Attachment(AttachmentKind::Printable(attachment)) => {
                    Some(attachment.to_string())
                }
                _ => None,
            })
            .collect::<Vec<String>>()
            .join(" | ")
    }
}

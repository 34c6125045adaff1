//! Document text extraction for persona derivation
//!
//! [`LocalDocumentReader`] implements the
//! [`DocumentReaderPort`](parley_application::DocumentReaderPort): it stages an
//! upload in a transient directory and extracts text from the staged copy.

mod docx;
mod pdf;
mod reader;
mod staging;
mod text;

pub use reader::LocalDocumentReader;
pub use staging::{StagedUpload, UploadStaging};

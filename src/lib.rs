pub mod config;
pub mod error;
pub mod persister;
pub mod upload;

pub use error::{PersistenceError, UnsupportedHandleError};
pub use persister::persist_uploads;
pub use upload::{RawUpload, UploadSource, UploadedFile};

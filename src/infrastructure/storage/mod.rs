mod temp_file_guard;
mod upload_spool;

pub use temp_file_guard::TempFileGuard;
pub use upload_spool::{SpooledUpload, UploadSpool, UploadSpoolError};

mod composite_file_loader;
mod mock_file_loader;
mod ocr_adapter;
mod pdf_adapter;
mod video_adapter;

pub use composite_file_loader::CompositeFileLoader;
pub use mock_file_loader::MockFileLoader;
pub use ocr_adapter::OcrAdapter;
pub use pdf_adapter::PdfAdapter;
pub use video_adapter::VideoAdapter;

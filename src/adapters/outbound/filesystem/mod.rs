/// File system adapters: content data source and output writers
mod file_reader;
mod file_writer;

pub use file_reader::JsonContentSource;
pub use file_writer::{FileSystemWriter, StdoutPresenter};

pub mod get;
pub mod init;
pub mod preview;
pub mod report;
pub mod translate;

pub mod courses;
pub mod init;
pub mod shell;

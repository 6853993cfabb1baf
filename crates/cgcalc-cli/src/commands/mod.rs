pub mod calc;
pub mod init;
pub mod interactive;
pub mod scale;
pub mod validate;

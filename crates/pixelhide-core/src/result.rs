use crate::error::PixelhideError;

pub type Result<T> = std::result::Result<T, PixelhideError>;

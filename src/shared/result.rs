use super::error::SkinPackError;

pub type AppResult<T> = Result<T, SkinPackError>;

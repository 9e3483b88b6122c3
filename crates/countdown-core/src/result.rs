use crate::error::CountdownError;

pub type CountdownResult<T> = Result<T, CountdownError>;

use std::any::type_name;

use serde::de::DeserializeOwned;

use super::error::DecodeError;

pub fn decode<R: DeserializeOwned>(body: &str) -> Result<R, DecodeError> {
    serde_json::from_str::<R>(body).map_err(|e| DecodeError::new(type_name::<R>(), e))
}

pub fn decode_list<E: DeserializeOwned>(body: &str) -> Result<Vec<E>, DecodeError> {
    serde_json::from_str::<Vec<E>>(body).map_err(|e| DecodeError::new(type_name::<Vec<E>>(), e))
}

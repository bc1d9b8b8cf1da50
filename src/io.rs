//! IO
//!
//! JSON persistence for models and generator configuration.
use crate::errors::TreeCodeError;
use serde::{de::DeserializeOwned, Serialize};
use std::fs;
use std::path::Path;

pub trait ModelIO: Serialize + DeserializeOwned + Sized {
    /// Save the object as json to a file.
    ///
    /// * `path` - Path to save to.
    fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), TreeCodeError> {
        fs::write(path, self.json_dump()?).map_err(|e| TreeCodeError::UnableToWrite(e.to_string()))
    }

    /// Dump the object as a json string.
    fn json_dump(&self) -> Result<String, TreeCodeError> {
        serde_json::to_string(self).map_err(|e| TreeCodeError::UnableToWrite(e.to_string()))
    }

    /// Load the object from a json string.
    ///
    /// * `json_str` - String object, which can be deserialized from json.
    fn from_json(json_str: &str) -> Result<Self, TreeCodeError> {
        serde_json::from_str::<Self>(json_str).map_err(|e| TreeCodeError::UnableToRead(e.to_string()))
    }

    /// Load the object from a path to a json file.
    ///
    /// * `path` - Path to load from.
    fn load<P: AsRef<Path>>(path: P) -> Result<Self, TreeCodeError> {
        let json_str = fs::read_to_string(path).map_err(|e| TreeCodeError::UnableToRead(e.to_string()))?;
        Self::from_json(&json_str)
    }
}

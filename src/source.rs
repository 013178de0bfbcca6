use std::fs;
use std::io::Read;
use std::path::Path;

use crate::error::PreviewError;

pub fn load_component_source(path: &Path) -> Result<String, PreviewError> {
    if !path.exists() {
        return Err(PreviewError::FileNotFound(path.to_path_buf()));
    }
    Ok(fs::read_to_string(path)?)
}

pub fn read_component_source<R: Read>(mut reader: R) -> Result<String, PreviewError> {
    let mut payload = String::new();
    reader.read_to_string(&mut payload)?;
    Ok(payload)
}

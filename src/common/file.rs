use std::fs::File;
use std::io::{ErrorKind, Read, Result};
use std::path::Path;

/// Reads the whole file as text, `None` when it does not exist.
pub fn read_file(path: &Path) -> Result<Option<String>> {
    let mut file = match File::open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(err),
    };
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;

    Ok(Some(contents))
}

use anyhow::{anyhow, Result};
use serde::de::DeserializeOwned;
use std::{fs, io::Read, path::Path};

use crate::dejsonify;

/// Resolves a command line argument that is either `-` (stdin), a path to a
/// `.json` file, or an inline json string.
pub fn read_json_arg(arg: &str) -> Result<String> {
    if arg == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| anyhow!("Failed to read from stdin: {}", e))?;
        Ok(buffer)
    } else if arg.ends_with(".json") {
        read_json_file(arg)
    } else {
        Ok(arg.to_string())
    }
}

pub fn read_json_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|e| anyhow!("Failed to read file {:?}: {}", path, e))
}

pub fn load_json_arg<T>(arg: &str, what: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    let json = read_json_arg(arg)?;
    dejsonify::<T>(&json).map_err(|e| anyhow!("Failed to parse {}: {}", what, e))
}

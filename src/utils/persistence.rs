//! JSON helpers for files under ~/.tubes/.

use crate::constants::DATA_DIR_NAME;
use std::fs;
use std::io;
use std::path::PathBuf;

/// `~/.tubes/` without touching the filesystem. `None` if there is no home directory.
pub fn data_dir_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(DATA_DIR_NAME))
}

/// Get the ~/.tubes/ directory path, creating it if needed.
pub fn data_dir() -> io::Result<PathBuf> {
    let dir = data_dir_path().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Full path for a file in ~/.tubes/.
pub fn save_path(filename: &str) -> io::Result<PathBuf> {
    Ok(data_dir()?.join(filename))
}

/// Save a value as pretty-printed JSON to ~/.tubes/.
pub fn save_json<T: serde::Serialize>(filename: &str, data: &T) -> io::Result<()> {
    let path = save_path(filename)?;
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_dir_exists() {
        let dir = data_dir().expect("data_dir should succeed");
        assert!(dir.exists());
        assert!(dir.ends_with(".tubes"));
    }

    #[test]
    fn test_save_path_format() {
        let path = save_path("test.json").expect("save_path should succeed");
        assert!(path.to_string_lossy().ends_with(".tubes/test.json"));
    }

    #[test]
    fn test_save_json_writes_pretty_file() {
        let data = vec![20, 25, 15, 30];
        save_json("persistence_test.json", &data).expect("save should succeed");

        let path = save_path("persistence_test.json").expect("save_path should succeed");
        let json = fs::read_to_string(&path).expect("file should exist");
        assert!(json.contains('\n'));
        let loaded: Vec<i32> = serde_json::from_str(&json).expect("valid json");
        assert_eq!(loaded, data);

        fs::remove_file(path).ok();
    }
}

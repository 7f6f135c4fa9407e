use std::path::{Path, PathBuf};

#[derive(Clone, Debug, PartialEq)]
pub struct KiibordDirectory(PathBuf);

impl KiibordDirectory {
    pub fn new(p: PathBuf) -> Self {
        KiibordDirectory(p)
    }
    pub fn new_default() -> Result<Self, Box<dyn std::error::Error>> {
        default_datadir().map(KiibordDirectory::new)
    }
}

impl KiibordDirectory {
    pub fn exists(&self) -> bool {
        self.0.as_path().exists()
    }
    pub fn init(&self) -> Result<(), Box<dyn std::error::Error>> {
        create_directory(self.0.as_path())
    }
    pub fn path(&self) -> &Path {
        self.0.as_path()
    }
}

/// Absolute path to the kiibord data folder.
///
/// `~/.kiibord` on Linux, a "Kiibord" directory in the standard configuration directory
/// for the other OSes.
fn default_datadir() -> Result<PathBuf, Box<dyn std::error::Error>> {
    #[cfg(target_os = "linux")]
    let configs_dir = dirs::home_dir();

    #[cfg(not(target_os = "linux"))]
    let configs_dir = dirs::config_dir();

    if let Some(mut path) = configs_dir {
        #[cfg(target_os = "linux")]
        path.push(".kiibord");

        #[cfg(not(target_os = "linux"))]
        path.push("Kiibord");

        return Ok(path);
    }

    Err("Failed to get default data directory".into())
}

fn create_directory(datadir_path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(unix)]
    return {
        use std::fs::DirBuilder;
        use std::os::unix::fs::DirBuilderExt;

        let mut builder = DirBuilder::new();
        builder
            .mode(0o700)
            .recursive(true)
            .create(datadir_path)
            .map_err(|e| format!("Failed to create data directory: {}", e).into())
    };

    #[cfg(not(unix))]
    return {
        std::fs::create_dir_all(datadir_path)
            .map_err(|e| format!("Failed to create data directory: {}", e).into())
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_creates_nested_directories() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = KiibordDirectory::new(tmp.path().join("a").join("b"));
        assert!(!dir.exists());
        dir.init().unwrap();
        assert!(dir.exists());
        // idempotent
        dir.init().unwrap();
    }

    #[test]
    fn default_datadir_is_named_after_the_app() {
        if let Ok(dir) = KiibordDirectory::new_default() {
            let name = dir.path().file_name().unwrap().to_string_lossy().to_string();
            assert!(name == ".kiibord" || name == "Kiibord");
        }
    }
}

use colored::Colorize;
use directories::BaseDirs;
use std::env;
use std::path::PathBuf;

use crate::options::verbose;

/// Filesystem layout of the nvm installation this tool reads from.
///
/// Nothing in here is ever created or written; nvm owns the directory.
pub struct NvmDirs {
    pub root: PathBuf,
    pub versions_dir: PathBuf,
    pub init_script: PathBuf,
}

/// Resolve the nvm root: `NVM_DIR` when it points at a directory,
/// otherwise `~/.nvm`.
pub fn locate() -> NvmDirs {
    let root = match env::var_os("NVM_DIR").map(PathBuf::from) {
        Some(dir) if dir.is_dir() => dir,
        _ => default_root(),
    };

    if !root.is_dir() {
        eprintln!(
            "{} could not find nvm at {}. Is nvm installed and NVM_DIR set?",
            "Warning:".yellow(),
            root.display()
        );
    }

    verbose::log(&format!("nvm root resolved to {}", root.display()));

    let versions_dir = root.join("versions").join("node");
    let init_script = root.join("nvm.sh");

    NvmDirs {
        root,
        versions_dir,
        init_script,
    }
}

fn default_root() -> PathBuf {
    match BaseDirs::new() {
        Some(dirs) => dirs.home_dir().join(".nvm"),
        None => PathBuf::from(".nvm"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nvm_dir_override_wins_when_it_is_a_directory() {
        let dir = tempfile::TempDir::new().unwrap();
        temp_env::with_var("NVM_DIR", Some(dir.path()), || {
            let dirs = locate();
            assert_eq!(dirs.root, dir.path());
            assert!(dirs.versions_dir.ends_with("versions/node"));
            assert!(dirs.init_script.ends_with("nvm.sh"));
        });
    }

    #[test]
    fn non_directory_override_falls_back_to_home() {
        temp_env::with_var("NVM_DIR", Some("/definitely/not/a/real/dir"), || {
            let dirs = locate();
            assert!(dirs.root.ends_with(".nvm"));
        });
    }

    #[test]
    fn unset_override_falls_back_to_home() {
        temp_env::with_var("NVM_DIR", None::<&str>, || {
            let dirs = locate();
            assert!(dirs.root.ends_with(".nvm"));
        });
    }
}

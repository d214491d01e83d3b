use std::collections::BTreeSet;
use std::env;
use std::fs;
use std::path::PathBuf;
use std::process::Command;

use colored::Colorize;

use crate::config::NvmDirs;
use crate::nvm::version::NodeVersion;
use crate::options::verbose;

/// Discovers which Node.js versions are installed under the nvm root.
///
/// The directory scan is the source of truth; parsing `nvm ls` output is a
/// best-effort fallback for layouts the scan cannot see. Discovery never
/// fails outright: degraded sources are reported as warnings and the scan
/// carries on with whatever was found.
pub struct VersionScanner {
    dirs: NvmDirs,
}

impl VersionScanner {
    pub fn new(dirs: NvmDirs) -> Self {
        Self { dirs }
    }

    /// List installed versions, deduplicated and ascending.
    pub fn installed_versions(&self) -> Vec<NodeVersion> {
        let mut found = self.scan_versions_dir();
        if found.is_empty() {
            verbose::log("directory scan found nothing, falling back to 'nvm ls'");
            found = self.fallback_from_nvm_ls();
        }
        let unique: BTreeSet<NodeVersion> = found.into_iter().collect();
        unique.into_iter().collect()
    }

    fn scan_versions_dir(&self) -> Vec<NodeVersion> {
        if !self.dirs.versions_dir.is_dir() {
            return Vec::new();
        }

        let entries = match fs::read_dir(&self.dirs.versions_dir) {
            Ok(entries) => entries,
            Err(e) => {
                eprintln!(
                    "{} could not scan {}: {}",
                    "Warning:".yellow(),
                    self.dirs.versions_dir.display(),
                    e
                );
                return Vec::new();
            }
        };

        let mut candidates = Vec::new();
        for entry in entries {
            let Ok(entry) = entry else { continue };
            let path = entry.path();
            if !path.is_dir() {
                continue;
            }
            let file_name = entry.file_name();
            let Some(name) = file_name.to_str() else {
                continue;
            };
            let Some(version) = NodeVersion::parse_prefixed(name) else {
                continue;
            };
            // A version directory without bin/node is a broken install.
            if !path.join("bin").join("node").is_file() {
                continue;
            }
            candidates.push(version);
        }

        verbose::log(&format!(
            "directory scan found {} candidate(s) in {}",
            candidates.len(),
            self.dirs.versions_dir.display()
        ));
        candidates
    }

    fn fallback_from_nvm_ls(&self) -> Vec<NodeVersion> {
        let command = format!(
            "source \"{}\" >/dev/null 2>&1 && nvm ls --no-colors",
            self.dirs.init_script.display()
        );
        verbose::log_command("bash", &["-lc", command.as_str()]);

        let output = match Command::new("bash").args(["-lc", &command]).output() {
            Ok(output) => output,
            Err(e) => {
                eprintln!("{} could not run 'nvm ls': {}", "Warning:".yellow(), e);
                return Vec::new();
            }
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stderr = stderr.trim();
            if !stderr.is_empty() {
                eprintln!("{}", stderr);
            }
            return Vec::new();
        }

        parse_nvm_ls(&String::from_utf8_lossy(&output.stdout))
    }

    /// Version active in the shell that launched us, read from the
    /// `NVM_BIN` path nvm exports (`<root>/versions/node/vX.Y.Z/bin`).
    pub fn active_version(&self) -> Option<NodeVersion> {
        let bin = PathBuf::from(env::var_os("NVM_BIN")?);
        let name = bin.parent()?.file_name()?.to_str()?;
        NodeVersion::parse_prefixed(name)
    }

    /// Persistent default, read best-effort from `<root>/alias/default`.
    /// Aliases pointing at non-numeric targets such as `lts/*` yield `None`.
    pub fn default_version(&self) -> Option<NodeVersion> {
        let alias_file = self.dirs.root.join("alias").join("default");
        let alias = fs::read_to_string(alias_file).ok()?;
        NodeVersion::parse_prefixed(alias.trim())
    }
}

/// Parse `nvm ls --no-colors` output into version candidates.
///
/// Deliberately narrow: a line contributes a candidate only when its first
/// token is `v` followed by digits and dots. Alias lines such as
/// `default -> v18.20.8` never match. This is a fallback, not a faithful
/// reader of every output shape nvm can produce.
pub(crate) fn parse_nvm_ls(output: &str) -> Vec<NodeVersion> {
    let mut candidates = Vec::new();
    for line in output.lines() {
        let Some(token) = line.split_whitespace().next() else {
            continue;
        };
        if !token.starts_with('v') {
            continue;
        }
        if !token[1..].bytes().all(|b| b.is_ascii_digit() || b == b'.') {
            continue;
        }
        if let Some(version) = NodeVersion::parse_prefixed(token) {
            candidates.push(version);
        }
    }
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn scanner_rooted_at(root: &Path) -> VersionScanner {
        VersionScanner::new(NvmDirs {
            root: root.to_path_buf(),
            versions_dir: root.join("versions").join("node"),
            init_script: root.join("nvm.sh"),
        })
    }

    fn install_fake_version(root: &Path, dir_name: &str, with_binary: bool) {
        let dir = root.join("versions").join("node").join(dir_name);
        fs::create_dir_all(dir.join("bin")).unwrap();
        if with_binary {
            fs::write(dir.join("bin").join("node"), b"").unwrap();
        }
    }

    fn rendered(versions: &[NodeVersion]) -> Vec<String> {
        versions.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn finds_installed_versions_sorted_ascending() {
        let root = tempfile::TempDir::new().unwrap();
        install_fake_version(root.path(), "v18.20.8", true);
        install_fake_version(root.path(), "v4.9.1", true);
        install_fake_version(root.path(), "v4.10.0", true);

        let versions = scanner_rooted_at(root.path()).installed_versions();
        assert_eq!(rendered(&versions), vec!["4.9.1", "4.10.0", "18.20.8"]);
    }

    #[test]
    fn deduplicates_prefixed_and_bare_directory_names() {
        let root = tempfile::TempDir::new().unwrap();
        install_fake_version(root.path(), "v18.20.8", true);
        install_fake_version(root.path(), "18.20.8", true);

        let versions = scanner_rooted_at(root.path()).installed_versions();
        assert_eq!(rendered(&versions), vec!["18.20.8"]);
    }

    #[test]
    fn skips_broken_installs_and_non_numeric_names() {
        let root = tempfile::TempDir::new().unwrap();
        install_fake_version(root.path(), "v4.9.1", true);
        install_fake_version(root.path(), "v16.20.2", false);
        install_fake_version(root.path(), "v18.20.8-rc1", true);
        install_fake_version(root.path(), ".cache", true);

        let versions = scanner_rooted_at(root.path()).installed_versions();
        assert_eq!(rendered(&versions), vec!["4.9.1"]);
    }

    #[test]
    fn missing_layout_yields_an_empty_list() {
        let root = tempfile::TempDir::new().unwrap();
        let versions = scanner_rooted_at(root.path()).installed_versions();
        assert!(versions.is_empty());
    }

    #[test]
    fn parses_plain_version_lines_from_nvm_ls() {
        let output = "\
       v16.20.2
        v4.9.1
default -> v18.20.8
lts/hydrogen -> v18.20.8 (-> N/A)
system
";
        let versions = parse_nvm_ls(output);
        assert_eq!(rendered(&versions), vec!["16.20.2", "4.9.1"]);
    }

    #[test]
    fn arrow_marked_current_line_is_not_picked_up() {
        // The fallback only reads lines whose first token is the version.
        let versions = parse_nvm_ls("->     v18.20.8");
        assert!(versions.is_empty());
    }

    #[test]
    fn default_version_reads_the_alias_file() {
        let root = tempfile::TempDir::new().unwrap();
        fs::create_dir_all(root.path().join("alias")).unwrap();
        fs::write(root.path().join("alias").join("default"), "v18.20.8\n").unwrap();

        let scanner = scanner_rooted_at(root.path());
        assert_eq!(scanner.default_version(), Some("18.20.8".parse().unwrap()));
    }

    #[test]
    fn non_numeric_default_alias_yields_none() {
        let root = tempfile::TempDir::new().unwrap();
        fs::create_dir_all(root.path().join("alias")).unwrap();
        fs::write(root.path().join("alias").join("default"), "lts/*\n").unwrap();

        let scanner = scanner_rooted_at(root.path());
        assert_eq!(scanner.default_version(), None);
    }

    #[test]
    fn active_version_comes_from_the_nvm_bin_path() {
        let root = tempfile::TempDir::new().unwrap();
        let scanner = scanner_rooted_at(root.path());
        temp_env::with_var("NVM_BIN", Some("/home/u/.nvm/versions/node/v18.20.8/bin"), || {
            assert_eq!(scanner.active_version(), Some("18.20.8".parse().unwrap()));
        });
        temp_env::with_var("NVM_BIN", None::<&str>, || {
            assert_eq!(scanner.active_version(), None);
        });
    }
}

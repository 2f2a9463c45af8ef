use std::fmt;
use std::path::Path;

/// Normalized identity of a loaded environment.
///
/// The host reports which file it currently has loaded; jobs carry the file
/// they need. The two may spell the same path differently (drive-letter
/// case, backslashes, trailing separator), so identity comparison goes
/// through this normalized form and never through raw path equality.
///
/// Normalization: separators unified to `/`, case folded, trailing
/// separator trimmed. The value is used only for equality, never to touch
/// the filesystem.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EnvironmentId(String);

impl EnvironmentId {
    /// Build an identity from a path.
    pub fn from_path(path: &Path) -> Self {
        let mut s = path.to_string_lossy().replace('\\', "/").to_lowercase();
        while s.len() > 1 && s.ends_with('/') {
            s.pop();
        }
        Self(s)
    }

    /// The normalized form as a string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EnvironmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&Path> for EnvironmentId {
    fn from(path: &Path) -> Self {
        Self::from_path(path)
    }
}

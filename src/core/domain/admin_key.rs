//! Admin key type.
//!
//! The backend's administrative credential. Wiped from memory on drop and
//! redacted in `Debug` output so it never reaches the logs by accident.

use std::fmt;

use zeroize::Zeroizing;

/// A generated admin key.
#[derive(Clone, PartialEq, Eq)]
pub struct AdminKey(Zeroizing<String>);

impl AdminKey {
    /// Extract the key from the helper's raw output.
    ///
    /// The helper may print a banner before the key, so the last non-empty
    /// line wins. Returns `None` when the output is blank.
    pub fn from_helper_output(output: &str) -> Option<Self> {
        output
            .lines()
            .map(str::trim)
            .rev()
            .find(|line| !line.is_empty())
            .map(|line| Self(Zeroizing::new(line.to_string())))
    }

    /// The secret value.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AdminKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AdminKey(<redacted>)")
    }
}

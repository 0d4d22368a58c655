//! Shared test utilities for the CLI end-to-end tests.
//!
//! ## Usage
//!
//! Add `mod common;` to your test file, then use the helpers:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new().with_descriptor(descriptors::NODEJS);
//!     fixture.command().assert().success();
//! }
//! ```

use assert_fs::prelude::*;
use std::path::{Path, PathBuf};

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    pub use assert_cmd::cargo::cargo_bin_cmd;
    pub use assert_fs::prelude::*;
    #[allow(unused_imports)]
    pub use assert_fs::TempDir;
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::descriptors;
    pub use super::TestFixture;
}

/// `buildpack.toml` documents used across tests.
#[allow(dead_code)]
pub mod descriptors {
    /// Three order groups sharing `ca-certificates, node-engine` at the
    /// beginning and `procfile` at the end. The shared buildpacks are
    /// optional except for `node-engine`.
    pub const NODEJS: &str = r#"
api = "0.7"

[buildpack]
  id = "paketo-buildpacks/nodejs"
  name = "Paketo Buildpack for Node.js"
  version = "1.2.3"

[[order]]
  [[order.group]]
    id = "paketo-buildpacks/ca-certificates"
    optional = true
    version = "3.6.3"
  [[order.group]]
    id = "paketo-buildpacks/node-engine"
    version = "1.2.0"
  [[order.group]]
    id = "paketo-buildpacks/yarn"
    version = "1.3.0"
  [[order.group]]
    id = "paketo-buildpacks/yarn-install"
    version = "1.1.0"
  [[order.group]]
    id = "paketo-buildpacks/procfile"
    optional = true
    version = "5.6.0"

[[order]]
  [[order.group]]
    id = "paketo-buildpacks/ca-certificates"
    optional = true
    version = "3.6.3"
  [[order.group]]
    id = "paketo-buildpacks/node-engine"
    version = "1.2.0"
  [[order.group]]
    id = "paketo-buildpacks/npm-install"
    version = "1.1.0"
  [[order.group]]
    id = "paketo-buildpacks/procfile"
    optional = true
    version = "5.6.0"

[[order]]
  [[order.group]]
    id = "paketo-buildpacks/ca-certificates"
    optional = true
    version = "3.6.3"
  [[order.group]]
    id = "paketo-buildpacks/node-engine"
    version = "1.2.0"
  [[order.group]]
    id = "paketo-buildpacks/node-start"
  [[order.group]]
    id = "paketo-buildpacks/procfile"
    optional = true
    version = "5.6.0"
"#;

    /// A component buildpack: valid TOML without order groups.
    pub const NO_ORDER: &str = r#"
api = "0.7"

[buildpack]
  id = "paketo-buildpacks/go-dist"
  version = "2.0.0"
"#;

    /// Not valid TOML.
    pub const INVALID_TOML: &str = "[[order]\n  id = ";
}

/// A temporary directory holding an optional `buildpack.toml`.
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

impl TestFixture {
    /// Create a new test fixture with an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Write `buildpack.toml` with the given content.
    pub fn with_descriptor(self, content: &str) -> Self {
        self.temp_dir
            .child("buildpack.toml")
            .write_str(content)
            .expect("Failed to write descriptor");
        self
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Get the path to the descriptor file.
    pub fn descriptor_path(&self) -> PathBuf {
        self.temp_dir.path().join("buildpack.toml")
    }

    /// A command running in this fixture's directory, with colors off and
    /// no inherited descriptor path.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("buildpack-order");
        cmd.current_dir(self.path())
            .env_remove("BUILDPACK_TOML_PATH")
            .arg("--color")
            .arg("never");
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_with_descriptor() {
        let fixture = TestFixture::new().with_descriptor(descriptors::NODEJS);
        assert!(fixture.descriptor_path().exists());
    }

    #[test]
    fn test_descriptors_are_valid_toml() {
        for descriptor in [descriptors::NODEJS, descriptors::NO_ORDER] {
            toml::from_str::<toml::Value>(descriptor).expect("Descriptor should be valid TOML");
        }
        assert!(toml::from_str::<toml::Value>(descriptors::INVALID_TOML).is_err());
    }
}

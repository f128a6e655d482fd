//! Target directory file system operations
//!
//! The workspace is the destination the scraped tree is written into. It is
//! opened with a pre-flight check and only ever written below its root.

use crate::error::DumpError;
use anyhow::Context;
use std::path::Path;

#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    /// Open a target root, failing when it is missing or not a directory
    pub fn open(path: &Path) -> anyhow::Result<Self> {
        if !path.is_dir() {
            anyhow::bail!(DumpError::TargetDir(path.to_path_buf()));
        }

        Ok(Workspace { path: path.into() })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write a file below the workspace root, creating parent directories
    ///
    /// `create_dir_all` treats already-existing directories as success, so
    /// repeated writes into the same subtree are idempotent. An existing
    /// file at the target path is overwritten.
    pub fn write_file(&self, relative_path: &Path, content: &[u8]) -> anyhow::Result<()> {
        let target = self.path.join(relative_path);

        if let Some(parent) = target.parent() {
            std::fs::create_dir_all(parent).context(format!(
                "Unable to create directory {}",
                parent.display()
            ))?;
        }

        std::fs::write(&target, content)
            .context(format!("Unable to write file {}", target.display()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Workspace;
    use crate::error::DumpError;
    use std::path::Path;

    #[test]
    fn rejects_a_missing_target_root() {
        let err = Workspace::open(Path::new("/definitely/not/there")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DumpError>(),
            Some(DumpError::TargetDir(_))
        ));
    }

    #[test]
    fn rejects_a_file_as_target_root() {
        let dir = assert_fs::TempDir::new().unwrap();
        let file_path = dir.path().join("plain.txt");
        std::fs::write(&file_path, b"x").unwrap();

        assert!(Workspace::open(&file_path).is_err());
    }

    #[test]
    fn writes_files_creating_nested_directories() {
        let dir = assert_fs::TempDir::new().unwrap();
        let workspace = Workspace::open(dir.path()).unwrap();

        workspace
            .write_file(Path::new("a/b/c.txt"), b"content")
            .unwrap();
        // second write into the same subtree must not trip on the existing dirs
        workspace
            .write_file(Path::new("a/b/d.txt"), b"more")
            .unwrap();

        assert_eq!(
            std::fs::read(dir.path().join("a/b/c.txt")).unwrap(),
            b"content"
        );
        assert_eq!(std::fs::read(dir.path().join("a/b/d.txt")).unwrap(), b"more");
    }

    #[test]
    fn overwrites_existing_files() {
        let dir = assert_fs::TempDir::new().unwrap();
        let workspace = Workspace::open(dir.path()).unwrap();

        workspace.write_file(Path::new("f.txt"), b"old").unwrap();
        workspace.write_file(Path::new("f.txt"), b"new").unwrap();

        assert_eq!(std::fs::read(dir.path().join("f.txt")).unwrap(), b"new");
    }
}

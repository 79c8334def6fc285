use async_trait::async_trait;
use std::io;
use std::path::{Path, PathBuf};

/// Read-only filesystem view the kernel table is looked up in.
///
/// Production uses [`RootFs`] rooted at `/`; tests substitute a fixture.
#[async_trait]
pub trait NeighborFs: Send + Sync {
    async fn exists(&self, name: &str) -> bool;

    async fn read(&self, name: &str) -> io::Result<Vec<u8>>;
}

/// Resolves relative names against a root directory on the real filesystem.
pub struct RootFs {
    root: PathBuf,
}

impl RootFs {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, name: &str) -> PathBuf {
        self.root.join(name.trim_start_matches('/'))
    }
}

#[async_trait]
impl NeighborFs for RootFs {
    async fn exists(&self, name: &str) -> bool {
        tokio::fs::try_exists(self.resolve(name))
            .await
            .unwrap_or(false)
    }

    async fn read(&self, name: &str) -> io::Result<Vec<u8>> {
        tokio::fs::read(self.resolve(name)).await
    }
}

//! Asynchronous recursive removal.

use std::path::{Path, PathBuf};

use futures::future::{try_join_all, BoxFuture, FutureExt};

use crate::error::{Error, Result};
use crate::fs::node::normalize;

/// Delete everything below `path`, then `path` itself unless `reserve` is set.
///
/// A missing path or anything that is not a directory resolves `Ok(())`
/// without touching the filesystem. The children of each directory are
/// removed concurrently and the directory is only removed once all of them
/// are gone. The first failing child fails the whole call; whatever was
/// already deleted stays deleted.
///
/// Symlinks are unlinked, never followed.
pub async fn remove_tree(path: impl AsRef<Path>, reserve: bool) -> Result<()> {
    let path = normalize(path);

    if !is_real_directory(&path).await {
        tracing::debug!("Nothing to remove at {}", path.display());
        return Ok(());
    }

    remove_directory(path, reserve).await
}

fn remove_directory(dir: PathBuf, reserve: bool) -> BoxFuture<'static, Result<()>> {
    async move {
        let mut entries = tokio::fs::read_dir(&dir).await?;
        let mut removals = Vec::new();

        while let Some(entry) = entries.next_entry().await? {
            removals.push(remove_entry(entry.path()));
        }

        tracing::debug!("Removing {} entries under {}", removals.len(), dir.display());
        try_join_all(removals).await?;

        if !reserve {
            tokio::fs::remove_dir(&dir).await?;
        }

        Ok(())
    }
    .boxed()
}

fn remove_entry(path: PathBuf) -> BoxFuture<'static, Result<()>> {
    async move {
        if is_real_directory(&path).await {
            remove_directory(path, false).await
        } else {
            tokio::fs::remove_file(&path).await.map_err(|e| {
                tracing::warn!("Failed to remove {}: {}", path.display(), e);
                Error::from(e)
            })
        }
    }
    .boxed()
}

async fn is_real_directory(path: &Path) -> bool {
    tokio::fs::symlink_metadata(path)
        .await
        .map(|meta| meta.is_dir())
        .unwrap_or(false)
}

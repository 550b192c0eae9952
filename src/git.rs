use std::num::NonZeroU32;
use std::path::Path;
use std::sync::atomic::AtomicBool;

use crate::error::Result;

/// Fetches a repository's working tree into a local directory.
pub trait RepoCloner {
    fn clone_repo(&self, url: &str, dest: &Path) -> Result<()>;
}

/// Shallow (depth 1) clone backed by gix.
#[derive(Debug, Default, Clone, Copy)]
pub struct GixCloner;

impl RepoCloner for GixCloner {
    fn clone_repo(&self, url: &str, dest: &Path) -> Result<()> {
        tracing::debug!(url, dest = %dest.display(), "cloning");
        let mut prepare = gix::prepare_clone(url, dest)?
            .with_shallow(gix::remote::fetch::Shallow::DepthAtRemote(NonZeroU32::MIN));
        let (mut checkout, _) =
            prepare.fetch_then_checkout(gix::progress::Discard, &AtomicBool::new(false))?;
        let _ = checkout.main_worktree(gix::progress::Discard, &AtomicBool::new(false))?;
        Ok(())
    }
}

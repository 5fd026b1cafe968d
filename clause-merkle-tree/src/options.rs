/// Default minimum level width before level hashing fans out across threads.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 1024;

/// Tree construction options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct BuildOptions {
    /// Levels with at least this many nodes are hashed in parallel when the
    /// `parallel` feature is enabled. Ignored otherwise.
    pub parallel_threshold: usize,
}

impl Default for BuildOptions {
    fn default() -> Self {
        BuildOptions {
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl BuildOptions {
    /// Options that never parallelize.
    pub fn sequential() -> Self {
        BuildOptions {
            parallel_threshold: usize::MAX,
        }
    }

    /// Whether a level of `width` nodes should be hashed in parallel.
    pub(crate) fn parallelize(&self, width: usize) -> bool {
        cfg!(feature = "parallel") && width >= self.parallel_threshold
    }
}

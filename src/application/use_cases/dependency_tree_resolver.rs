use crate::ports::outbound::PackageRegistry;
use crate::stats_analysis::domain::{DependencyNode, DependencyTreeResult, LatestManifest};
use dashmap::DashSet;
use futures::future::{join_all, BoxFuture, FutureExt};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Depth used when the caller does not choose one
pub const DEFAULT_MAX_DEPTH: usize = 3;

/// DependencyTreeResolver - resolves the runtime dependency graph of a package
///
/// The tree is built from the latest manifest of each package. The root sits
/// at depth 1; nodes above `max_depth` have their children resolved, nodes at
/// `max_depth` list their declared dependencies as stubs carrying the version
/// range, without further lookups.
///
/// Every package name is resolved at most once per call. The first position
/// that claims a name keeps it; later positions omit the dependency entirely.
/// Children of one node are resolved concurrently.
///
/// # Type Parameters
/// * `R` - PackageRegistry implementation
pub struct DependencyTreeResolver<R> {
    registry: R,
}

/// State shared by every node of one resolution
struct Traversal<'r, R> {
    registry: &'r R,
    visited: DashSet<String>,
    total_dependencies: AtomicUsize,
    max_depth: usize,
}

impl<R: PackageRegistry> DependencyTreeResolver<R> {
    pub fn new(registry: R) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &R {
        &self.registry
    }

    /// Resolves the dependency tree rooted at `package_name`
    ///
    /// # Arguments
    /// * `package_name` - Root package
    /// * `max_depth` - Deepest level whose dependencies are listed; 0 is treated as 1
    ///
    /// # Returns
    /// The tree with the number of declared dependencies over every fetched node,
    /// or `None` when the root package is unknown or its lookup fails.
    /// Failing dependencies below the root are left out of the tree.
    pub async fn resolve(
        &self,
        package_name: &str,
        max_depth: usize,
    ) -> Option<DependencyTreeResult> {
        let traversal = Traversal {
            registry: &self.registry,
            visited: DashSet::new(),
            total_dependencies: AtomicUsize::new(0),
            max_depth: max_depth.max(1),
        };

        traversal.visited.insert(package_name.to_string());
        let root = traversal.resolve_node(package_name.to_string(), 1).await?;

        Some(DependencyTreeResult::new(
            root,
            traversal.total_dependencies.load(Ordering::SeqCst),
            traversal.max_depth,
        ))
    }
}

impl<'r, R: PackageRegistry> Traversal<'r, R> {
    /// Resolves one package that the caller has already claimed in `visited`
    fn resolve_node<'s>(
        &'s self,
        name: String,
        depth: usize,
    ) -> BoxFuture<'s, Option<DependencyNode>> {
        async move {
            let LatestManifest {
                version,
                dependencies,
                ..
            } = self.registry.fetch_latest(&name).await.ok().flatten()?;

            self.total_dependencies
                .fetch_add(dependencies.len(), Ordering::SeqCst);

            let children = if depth < self.max_depth {
                // Claim before spawning so siblings and cousins never resolve the same name twice
                let pending: Vec<_> = dependencies
                    .into_keys()
                    .filter(|dependency| self.visited.insert(dependency.clone()))
                    .map(|dependency| self.resolve_node(dependency, depth + 1))
                    .collect();

                join_all(pending).await.into_iter().flatten().collect()
            } else {
                dependencies
                    .into_iter()
                    .map(|(dependency, range)| DependencyNode::new(dependency, stub_version(range)))
                    .collect()
            };

            Some(DependencyNode::new(name, version).with_dependencies(children))
        }
        .boxed()
    }
}

/// Declared range shown for an unresolved dependency
fn stub_version(range: String) -> String {
    if range.trim().is_empty() {
        "unknown".to_string()
    } else {
        range
    }
}

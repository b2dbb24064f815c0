use serde::Serialize;

/// One package in a resolved dependency tree
///
/// `version` is the resolved latest version for fetched nodes and the
/// declared range for stubs at the depth limit. `dependencies` is empty for
/// leaves and stubs and is then omitted from serialized output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DependencyNode {
    pub name: String,
    pub version: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<DependencyNode>,
}

impl DependencyNode {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            dependencies: Vec::new(),
        }
    }

    pub fn with_dependencies(mut self, dependencies: Vec<DependencyNode>) -> Self {
        self.dependencies = dependencies;
        self
    }

    pub fn has_dependencies(&self) -> bool {
        !self.dependencies.is_empty()
    }

    /// Number of nodes in this subtree, including this one
    pub fn node_count(&self) -> usize {
        1 + self
            .dependencies
            .iter()
            .map(DependencyNode::node_count)
            .sum::<usize>()
    }

    /// Number of levels in this subtree, a leaf has height 1
    pub fn height(&self) -> usize {
        1 + self
            .dependencies
            .iter()
            .map(DependencyNode::height)
            .max()
            .unwrap_or(0)
    }

    pub fn find(&self, name: &str) -> Option<&DependencyNode> {
        if self.name == name {
            return Some(self);
        }
        self.dependencies.iter().find_map(|child| child.find(name))
    }
}

/// Result of one dependency tree resolution
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DependencyTreeResult {
    root: DependencyNode,
    /// Every dependency name declared by a fetched node, duplicates included
    total_dependencies: usize,
    max_depth: usize,
}

impl DependencyTreeResult {
    pub fn new(root: DependencyNode, total_dependencies: usize, max_depth: usize) -> Self {
        Self {
            root,
            total_dependencies,
            max_depth,
        }
    }

    pub fn root(&self) -> &DependencyNode {
        &self.root
    }

    pub fn total_dependencies(&self) -> usize {
        self.total_dependencies
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> DependencyNode {
        DependencyNode::new("a", "1.0.0").with_dependencies(vec![
            DependencyNode::new("b", "2.0.0")
                .with_dependencies(vec![DependencyNode::new("d", "^4.0.0")]),
            DependencyNode::new("c", "3.0.0"),
        ])
    }

    #[test]
    fn test_node_count_and_height() {
        let tree = sample_tree();
        assert_eq!(tree.node_count(), 4);
        assert_eq!(tree.height(), 3);
        assert_eq!(DependencyNode::new("leaf", "1.0.0").height(), 1);
    }

    #[test]
    fn test_find() {
        let tree = sample_tree();
        assert_eq!(tree.find("d").unwrap().version, "^4.0.0");
        assert!(tree.find("missing").is_none());
    }

    #[test]
    fn test_leaf_serialization_omits_dependencies() {
        let leaf = DependencyNode::new("c", "3.0.0");
        let json = serde_json::to_value(&leaf).unwrap();
        assert!(json.get("dependencies").is_none());
        assert_eq!(json["name"], "c");
    }

    #[test]
    fn test_result_serializes_camel_case() {
        let result = DependencyTreeResult::new(sample_tree(), 3, 3);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["totalDependencies"], 3);
        assert_eq!(json["maxDepth"], 3);
        assert_eq!(json["root"]["dependencies"][0]["name"], "b");
    }
}

use std::fmt;

use serde::{Deserialize, Serialize};

use super::tree::Tree;

/// 用于JSON序列化的树结构
#[derive(Debug, Serialize, Deserialize)]
pub struct TreeVisualization {
    /// 根节点
    pub root: NodeVisualization,
    /// 节点总数
    pub node_count: usize,
    /// 树的高度
    pub height: usize,
}

/// 用于JSON序列化的节点结构
#[derive(Debug, Serialize, Deserialize)]
pub struct NodeVisualization {
    /// 节点值的文本形式
    pub value: String,
    /// 节点深度，根节点为 0
    pub depth: usize,
    pub left: Option<Box<NodeVisualization>>,
    pub right: Option<Box<NodeVisualization>>,
}

impl<T: fmt::Display> Tree<T> {
    /// 导出树结构为JSON格式
    ///
    /// 返回包含完整树结构的JSON字符串，用于可视化
    pub fn export_to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.create_visualization())
    }

    /// 创建用于可视化的树结构
    pub fn create_visualization(&self) -> TreeVisualization {
        TreeVisualization {
            root: create_node_visualization(self, 0),
            node_count: self.node_count(),
            height: self.height(),
        }
    }
}

/// 递归创建节点的可视化结构
fn create_node_visualization<T: fmt::Display>(node: &Tree<T>, depth: usize) -> NodeVisualization {
    NodeVisualization {
        value: node.value.to_string(),
        depth,
        left: node
            .left
            .as_deref()
            .map(|left| Box::new(create_node_visualization(left, depth + 1))),
        right: node
            .right
            .as_deref()
            .map(|right| Box::new(create_node_visualization(right, depth + 1))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list;

    #[test]
    fn test_json_export() {
        let tree = Tree::from_list(&list![3, 2, 5, 7, 1]).expect("Failed to build tree");
        let json = tree.export_to_json().expect("Failed to export JSON");

        assert!(json.contains("\"node_count\": 5"));
        assert!(json.contains("\"height\": 3"));
        assert!(json.contains("\"value\": \"7\""));

        let parsed: TreeVisualization =
            serde_json::from_str(&json).expect("Failed to parse exported JSON");
        assert_eq!(parsed.root.value, "3");
        assert_eq!(parsed.root.left.map(|left| left.depth), Some(1));
    }

    #[test]
    fn test_json_export_leaf() {
        let visualization = Tree::leaf("x").create_visualization();
        assert_eq!(visualization.node_count, 1);
        assert!(visualization.root.left.is_none());
        assert!(visualization.root.right.is_none());
    }
}

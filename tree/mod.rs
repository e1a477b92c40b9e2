#[allow(clippy::module_inception)]
pub mod tree;
pub mod visualization;

// 重新导出主要类型
pub use tree::Tree;
pub use visualization::{NodeVisualization, TreeVisualization};

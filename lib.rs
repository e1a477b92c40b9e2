//! # ninety-nine
//!
//! 经典 "99 题" 中链表与二叉树部分的 Rust 实现。
//!
//! ## 主要内容
//!
//! - [`List`]: 单链表及其算法目录（反转、展平、游程编码、旋转、随机抽取、组合等）
//! - [`Tree`]: 有序插入的二叉树与完全平衡树的枚举
//! - [`arithmetic`], [`logic`]: 素数判断与真值表
//!
//! ## 使用示例
//!
//! ```rust
//! use ninety_nine::{list, List};
//!
//! let letters = list!["a", "a", "a", "a", "b", "c", "c"];
//! assert_eq!(letters.encode(), list![(4, "a"), (1, "b"), (2, "c")]);
//! assert_eq!(letters.encode().decode(), letters);
//!
//! let range = List::range(4, 9).unwrap();
//! assert_eq!(range.to_string(), "[4, 5, 6, 7, 8, 9]");
//! ```

pub mod arithmetic;
pub mod config;
pub mod list;
pub mod logic;
pub mod tree;

use std::error::Error;

// 重新导出主要的公共接口
pub use crate::config::NinetyNineConfig;
pub use list::{Encoded, List, ListError, Nested, Node};
pub use tree::Tree;

pub type Result<T> = std::result::Result<T, Box<dyn Error + Send + Sync>>;

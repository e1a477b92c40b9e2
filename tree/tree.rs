use std::fmt;

use tracing::debug;

use crate::list::List;

/// 二叉树节点
///
/// 每个节点独占地拥有左右子树。有序插入采用非严格的 BST 规则：
/// 不小于当前值的元素进入右子树。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree<T> {
    /// 节点的值
    pub value: T,
    /// 左子树
    pub left: Option<Box<Tree<T>>>,
    /// 右子树
    pub right: Option<Box<Tree<T>>>,
}

impl<T> Tree<T> {
    /// 创建叶子节点
    pub fn leaf(value: T) -> Self {
        Tree {
            value,
            left: None,
            right: None,
        }
    }

    /// 由值和左右子树创建节点
    pub fn new(value: T, left: Option<Tree<T>>, right: Option<Tree<T>>) -> Self {
        Tree {
            value,
            left: left.map(Box::new),
            right: right.map(Box::new),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// 节点总数
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.left.as_deref());
            stack.extend(node.right.as_deref());
        }
        count
    }

    /// 树的高度，叶子节点为 1
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack = vec![(self, 1)];
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.left.as_deref().map(|left| (left, depth + 1)));
            stack.extend(node.right.as_deref().map(|right| (right, depth + 1)));
        }
        height
    }

    /// 左右子树在结构上互为镜像时返回 true (P56)，不比较节点的值
    pub fn is_symmetric(&self) -> bool {
        is_mirror(self.left.as_deref(), self.right.as_deref())
    }

    /// 中序遍历的值
    pub fn in_order(&self) -> List<&T> {
        let mut values = Vec::new();
        let mut stack = Vec::new();
        let mut current = Some(self);

        while current.is_some() || !stack.is_empty() {
            while let Some(node) = current {
                stack.push(node);
                current = node.left.as_deref();
            }
            if let Some(node) = stack.pop() {
                values.push(&node.value);
                current = node.right.as_deref();
            }
        }

        List::from(values)
    }
}

impl<T: PartialOrd> Tree<T> {
    /// 有序插入
    ///
    /// `value >= self.value` 时进入右子树，否则进入左子树，
    /// 在第一个空位置创建叶子节点。O(深度)，沿子树槽位迭代下降。
    pub fn insert(&mut self, value: T) {
        let mut slot = child_slot(self, &value);
        loop {
            match { slot } {
                Some(node) => slot = child_slot(node, &value),
                empty => {
                    *empty = Some(Box::new(Tree::leaf(value)));
                    return;
                }
            }
        }
    }
}

/// `value` 应进入的子树槽位
fn child_slot<'a, T: PartialOrd>(
    node: &'a mut Tree<T>,
    value: &T,
) -> &'a mut Option<Box<Tree<T>>> {
    if *value >= node.value {
        &mut node.right
    } else {
        &mut node.left
    }
}

impl<T: PartialOrd + Clone> Tree<T> {
    /// 由链表构建二叉搜索树 (P57)
    ///
    /// 第一个元素作为根，其余元素按顺序插入；形状取决于插入顺序，不做平衡。
    /// 空链表返回 `None`。
    pub fn from_list(list: &List<T>) -> Option<Tree<T>> {
        let mut values = list.iter().cloned();
        let mut tree = Tree::leaf(values.next()?);
        for value in values {
            tree.insert(value);
        }
        Some(tree)
    }
}

impl<T: Clone> Tree<T> {
    /// 构建所有含 `n` 个节点的完全平衡树 (P55)
    ///
    /// 每个节点左右子树的节点数之差不超过 1，所有节点的值都是 `value`。
    /// `n = 0` 时不存在非空树，返回空链表。
    pub fn c_balanced(n: usize, value: T) -> List<Tree<T>> {
        let shapes = balanced_shapes(n, &value);
        debug!(n, count = shapes.len(), "generated balanced trees");
        shapes.into_iter().flatten().map(|tree| *tree).collect()
    }
}

fn is_mirror<T>(left: Option<&Tree<T>>, right: Option<&Tree<T>>) -> bool {
    match (left, right) {
        (None, None) => true,
        (Some(left), Some(right)) => {
            is_mirror(left.left.as_deref(), right.right.as_deref())
                && is_mirror(left.right.as_deref(), right.left.as_deref())
        }
        _ => false,
    }
}

/// 所有含 `n` 个节点的平衡子树，`None` 表示空子树
fn balanced_shapes<T: Clone>(n: usize, value: &T) -> Vec<Option<Box<Tree<T>>>> {
    if n == 0 {
        return vec![None];
    }

    let smaller = (n - 1) / 2;
    let larger = n - 1 - smaller;
    let small_shapes = balanced_shapes(smaller, value);

    let mut result = Vec::new();
    if smaller == larger {
        for left in &small_shapes {
            for right in &small_shapes {
                result.push(node(value, left, right));
            }
        }
    } else {
        let large_shapes = balanced_shapes(larger, value);
        for small in &small_shapes {
            for large in &large_shapes {
                result.push(node(value, small, large));
                result.push(node(value, large, small));
            }
        }
    }
    result
}

fn node<T: Clone>(
    value: &T,
    left: &Option<Box<Tree<T>>>,
    right: &Option<Box<Tree<T>>>,
) -> Option<Box<Tree<T>>> {
    Some(Box::new(Tree {
        value: value.clone(),
        left: left.clone(),
        right: right.clone(),
    }))
}

// 用显式栈释放子树，退化成链的树不会因递归析构而栈溢出
impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        let mut stack: Vec<Box<Tree<T>>> = Vec::new();
        stack.extend(self.left.take());
        stack.extend(self.right.take());
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

/// 输出时的待办项
enum Token<'a, T> {
    Node(&'a Tree<T>),
    Text(&'static str),
}

impl<'a, T> Token<'a, T> {
    fn child(child: &'a Option<Box<Tree<T>>>) -> Self {
        match child.as_deref() {
            Some(node) => Token::Node(node),
            None => Token::Text("nil"),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut stack = vec![Token::Node(self)];
        while let Some(token) = stack.pop() {
            match token {
                Token::Node(node) => {
                    write!(f, "T({} ", node.value)?;
                    stack.push(Token::Text(")"));
                    stack.push(Token::child(&node.right));
                    stack.push(Token::Text(" "));
                    stack.push(Token::child(&node.left));
                }
                Token::Text(text) => f.write_str(text)?,
            }
        }
        Ok(())
    }
}

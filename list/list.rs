use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::error::ListError;
use super::node::Node;

/// 单链表主结构
///
/// 只持有头节点，长度通过遍历得到。
/// 所有目录算法都返回新链表，原链表保持不变；需要原地修改的变体单独以
/// `_in_place` 命名。
pub struct List<T> {
    /// 头节点
    head: Option<Box<Node<T>>>,
}

impl<T> List<T> {
    /// 创建空链表
    pub fn new() -> Self {
        List { head: None }
    }

    /// 按输入顺序构建链表，O(n)
    pub fn from_values<I: IntoIterator<Item = T>>(values: I) -> Self {
        values.into_iter().collect()
    }

    /// 只含一个元素的链表
    pub fn singleton(value: T) -> Self {
        List {
            head: Some(Box::new(Node::new(value))),
        }
    }

    /// 检查链表是否为空
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// 节点数量 (P04)，O(n)
    pub fn len(&self) -> usize {
        let mut count = 0;
        let mut current = self.head.as_deref();
        while let Some(node) = current {
            count += 1;
            current = node.next.as_deref();
        }
        count
    }

    /// 第一个元素
    pub fn head(&self) -> Option<&T> {
        self.head.as_deref().map(|node| &node.value)
    }

    /// 最后一个元素 (P01)
    ///
    /// # 错误
    /// 空链表返回 `ListError::EmptyList`
    pub fn last(&self) -> Result<&T, ListError> {
        let mut current = self.head.as_deref().ok_or(ListError::EmptyList)?;
        while let Some(next) = current.next.as_deref() {
            current = next;
        }
        Ok(&current.value)
    }

    /// 倒数第二个元素 (P02)，少于两个元素时返回 `None`
    pub fn penultimate(&self) -> Option<&T> {
        let mut current = self.head.as_deref()?;
        while let Some(next) = current.next.as_deref() {
            if next.is_tail() {
                return Some(&current.value);
            }
            current = next;
        }
        None
    }

    /// 第 `index` 个元素 (P03)，从 0 开始计数
    pub fn nth(&self, index: usize) -> Option<&T> {
        self.iter().nth(index)
    }

    /// 倒数第 `k` 个元素，`k = 0` 即最后一个元素
    ///
    /// 双指针遍历：先让 `lead` 前进 `k` 步，再让两个指针同时前进直到
    /// `lead` 到达尾节点。
    pub fn nth_from_end(&self, k: usize) -> Option<&T> {
        let mut lead = self.head.as_deref()?;
        for _ in 0..k {
            lead = lead.next.as_deref()?;
        }

        let mut trail = self.head.as_deref()?;
        while let Some(next) = lead.next.as_deref() {
            lead = next;
            trail = trail.next.as_deref()?;
        }
        Some(&trail.value)
    }

    /// 在头部插入元素，O(1)
    pub fn push_front(&mut self, value: T) {
        let next = self.head.take();
        self.head = Some(Box::new(Node::with_next(value, next)));
    }

    /// 移除并返回头部元素，O(1)
    pub fn pop_front(&mut self) -> Option<T> {
        self.head.take().map(|node| {
            let (value, next) = node.into_parts();
            self.head = next;
            value
        })
    }

    /// 在尾部追加元素，O(n)
    pub fn push_back(&mut self, value: T) {
        *self.tail_slot() = Some(Box::new(Node::new(value)));
    }

    /// 把另一个链表的整条节点链接到尾部，不复制节点
    pub fn append(&mut self, mut other: List<T>) {
        *self.tail_slot() = other.head.take();
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            next: self.head.as_deref_mut(),
        }
    }

    /// 内部方法：最后一个 `next` 槽位（空链表时为头指针本身）
    pub(crate) fn tail_slot(&mut self) -> &mut Option<Box<Node<T>>> {
        let mut cursor = &mut self.head;
        loop {
            // `{ cursor }` 把引用移入 match，循环中不会重复借用
            match { cursor } {
                Some(node) => cursor = &mut node.next,
                tail => return tail,
            }
        }
    }

    /// 内部方法：获取头指针的可变引用
    pub(crate) fn head_mut(&mut self) -> &mut Option<Box<Node<T>>> {
        &mut self.head
    }

    /// 内部方法：获取头节点的引用
    pub(crate) fn head_node(&self) -> Option<&Node<T>> {
        self.head.as_deref()
    }
}

impl<T: Clone> List<T> {
    /// 连接两个链表，返回新链表
    pub fn concat(&self, other: &List<T>) -> List<T> {
        self.iter().chain(other.iter()).cloned().collect()
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

// 逐个释放节点，避免长链表在默认的递归析构中栈溢出
impl<T> Drop for List<T> {
    fn drop(&mut self) {
        let mut current = self.head.take();
        while let Some(mut node) = current {
            current = node.next.take();
        }
    }
}

impl<T: Clone> Clone for List<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, "]")
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = List::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for List<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut tail = self.tail_slot();
        for value in iter {
            tail = &mut tail.insert(Box::new(Node::new(value))).next;
        }
    }
}

impl<T> From<Vec<T>> for List<T> {
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}

impl<T: Serialize> Serialize for List<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for List<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<T>::deserialize(deserializer).map(List::from)
    }
}

/// 借用迭代器
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.value
        })
    }
}

/// 可变借用迭代器
pub struct IterMut<'a, T> {
    next: Option<&'a mut Node<T>>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.take().map(|node| {
            self.next = node.next.as_deref_mut();
            &mut node.value
        })
    }
}

/// 所有权迭代器，依次弹出头部元素
pub struct IntoIter<T>(List<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop_front()
    }
}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

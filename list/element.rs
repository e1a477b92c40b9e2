use std::fmt;

use serde::{Deserialize, Serialize};

use super::list::List;

/// 嵌套链表元素
///
/// `flatten` 的输入：每个元素要么是标量，要么是另一层嵌套链表。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Nested<T> {
    /// 标量值
    Value(T),
    /// 嵌套的子链表
    List(List<Nested<T>>),
}

impl<T> Nested<T> {
    pub fn value(value: T) -> Self {
        Nested::Value(value)
    }

    pub fn list<I: IntoIterator<Item = Nested<T>>>(items: I) -> Self {
        Nested::List(items.into_iter().collect())
    }

    /// 嵌套深度：标量为 0，空子链表为 1
    pub fn depth(&self) -> usize {
        match self {
            Nested::Value(_) => 0,
            Nested::List(items) => 1 + items.iter().map(Nested::depth).max().unwrap_or(0),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Nested<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Nested::Value(value) => write!(f, "{}", value),
            Nested::List(items) => write!(f, "{}", items),
        }
    }
}

/// 改进的游程编码元素 (P11)
///
/// 只出现一次的元素直接保存值，重复的元素保存 `(次数, 值)`。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Encoded<T> {
    Single(T),
    Run(usize, T),
}

impl<T> Encoded<T> {
    /// 这个元素代表的重复次数
    pub fn count(&self) -> usize {
        match self {
            Encoded::Single(_) => 1,
            Encoded::Run(count, _) => *count,
        }
    }

    pub fn value(&self) -> &T {
        match self {
            Encoded::Single(value) => value,
            Encoded::Run(_, value) => value,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Encoded<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Encoded::Single(value) => write!(f, "{}", value),
            Encoded::Run(count, value) => write!(f, "({}, {})", count, value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list;

    #[test]
    fn test_nested_depth() {
        let nested = Nested::list(vec![
            Nested::list(vec![Nested::value(1), Nested::value(1)]),
            Nested::value(2),
            Nested::list(vec![
                Nested::value(3),
                Nested::list(vec![Nested::value(5), Nested::value(8)]),
            ]),
        ]);
        assert_eq!(nested.depth(), 3);
        assert_eq!(Nested::value("a").depth(), 0);
        assert_eq!(Nested::<i32>::list(vec![]).depth(), 1);
    }

    #[test]
    fn test_nested_display() {
        let nested = Nested::list(vec![
            Nested::list(vec![Nested::value(1), Nested::value(1)]),
            Nested::value(2),
        ]);
        assert_eq!(nested.to_string(), "[[1, 1], 2]");
    }

    #[test]
    fn test_nested_json_is_untagged() {
        let nested: Nested<i32> = serde_json::from_str("[[1, 1], 2, [3, [5, 8]]]")
            .expect("Failed to parse nested list");
        match nested {
            Nested::List(items) => assert_eq!(items.len(), 3),
            Nested::Value(_) => panic!("Expected a nested list"),
        }
    }

    #[test]
    fn test_encoded_accessors() {
        let single = Encoded::Single("b");
        let run = Encoded::Run(4, "a");
        assert_eq!(single.count(), 1);
        assert_eq!(run.count(), 4);
        assert_eq!(run.value(), &"a");
        assert_eq!(list![single, run].to_string(), "[b, (4, a)]");
    }
}

use crate::list::element::Nested;
use crate::list::list::List;
use crate::list::node::Node;

/// 结构变换相关算法
impl<T> List<T> {
    /// 原地反转链表 (P05)
    ///
    /// 逐个摘下头节点并挂到已反转部分的前面，O(n) 时间，O(1) 额外空间。
    pub fn reverse_in_place(&mut self) {
        let mut reversed: Option<Box<Node<T>>> = None;
        let mut current = self.head_mut().take();

        while let Some(mut node) = current {
            current = node.next.take();
            node.next = reversed;
            reversed = Some(node);
        }

        *self.head_mut() = reversed;
    }
}

impl<T: Clone> List<T> {
    /// 返回反转后的新链表 (P05)
    pub fn reverse(&self) -> List<T> {
        let mut reversed = List::new();
        for value in self.iter() {
            reversed.push_front(value.clone());
        }
        reversed
    }
}

impl<T: PartialEq> List<T> {
    /// 判断链表是否为回文 (P06)
    ///
    /// 先把所有值压入辅助栈，再从头遍历并与出栈的值比较。空链表是回文。
    pub fn is_palindrome(&self) -> bool {
        let mut stack: Vec<&T> = self.iter().collect();

        for value in self.iter() {
            match stack.pop() {
                Some(other) if other == value => {}
                _ => return false,
            }
        }

        stack.is_empty()
    }
}

impl<T: Clone> List<Nested<T>> {
    /// 展平嵌套链表 (P07)
    ///
    /// 按从左到右的深度优先顺序输出所有标量，递归深度等于嵌套深度。
    pub fn flatten(&self) -> List<T> {
        let mut result = List::new();
        flatten_into(self, result.head_mut());
        result
    }
}

impl<T: Clone> Nested<T> {
    /// 展平单个嵌套元素，标量得到只含一个元素的链表
    pub fn flatten(&self) -> List<T> {
        match self {
            Nested::Value(value) => List::singleton(value.clone()),
            Nested::List(items) => items.flatten(),
        }
    }
}

/// 把 `items` 中的标量依次写入 `tail` 槽位，返回新的尾槽位
fn flatten_into<'a, T: Clone>(
    items: &List<Nested<T>>,
    mut tail: &'a mut Option<Box<Node<T>>>,
) -> &'a mut Option<Box<Node<T>>> {
    for item in items {
        match item {
            Nested::Value(value) => {
                tail = &mut tail.insert(Box::new(Node::new(value.clone()))).next;
            }
            Nested::List(inner) => {
                tail = flatten_into(inner, tail);
            }
        }
    }
    tail
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list;
    use proptest::prelude::*;

    #[test]
    fn test_reverse() {
        let fib = list![1, 1, 2, 3, 5, 8];
        assert_eq!(fib.reverse(), list![8, 5, 3, 2, 1, 1]);
        assert_eq!(fib, list![1, 1, 2, 3, 5, 8]);
        assert_eq!(list![1].reverse(), list![1]);
        assert_eq!(List::<i32>::new().reverse(), List::new());
    }

    #[test]
    fn test_reverse_in_place() {
        let mut list = list![1, 1, 2, 1, 1];
        list.reverse_in_place();
        assert_eq!(list, list![1, 1, 2, 1, 1]);

        let mut list = list!["a", "b", "c"];
        list.reverse_in_place();
        assert_eq!(list, list!["c", "b", "a"]);
        assert_eq!(list.len(), 3);

        let mut empty: List<i32> = List::new();
        empty.reverse_in_place();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_is_palindrome() {
        assert!(list![1, 1, 2, 1, 1].is_palindrome());
        assert!(!list![1, 1, 2, 3, 5, 8].is_palindrome());
        assert!(list![1].is_palindrome());
        assert!(List::<i32>::new().is_palindrome());
        assert!(list!["a", "b", "b", "a"].is_palindrome());
    }

    #[test]
    fn test_flatten() {
        // [[1, 1], 2, [3, [5, 8]]]
        let nested = list![
            Nested::list(vec![Nested::value(1), Nested::value(1)]),
            Nested::value(2),
            Nested::list(vec![
                Nested::value(3),
                Nested::list(vec![Nested::value(5), Nested::value(8)]),
            ]),
        ];
        assert_eq!(nested.flatten(), list![1, 1, 2, 3, 5, 8]);
    }

    #[test]
    fn test_flatten_deep_and_flat() {
        let flat = list![Nested::value(1), Nested::value(2)];
        assert_eq!(flat.flatten(), list![1, 2]);

        // [[[[[1], [2], [3, 4]]]]]
        let deep = Nested::list(vec![Nested::list(vec![Nested::list(vec![Nested::list(vec![
            Nested::list(vec![Nested::value(1)]),
            Nested::list(vec![Nested::value(2)]),
            Nested::list(vec![Nested::value(3), Nested::value(4)]),
        ])])])]);
        assert_eq!(deep.flatten(), list![1, 2, 3, 4]);

        let empty: List<Nested<i32>> = list![Nested::list(vec![]), Nested::list(vec![])];
        assert!(empty.flatten().is_empty());
    }

    proptest! {
        #[test]
        fn prop_reverse_twice_is_identity(values in prop::collection::vec(any::<i32>(), 0..64)) {
            let list = List::from(values);
            let reversed = list.reverse();
            prop_assert_eq!(reversed.len(), list.len());
            prop_assert_eq!(reversed.reverse(), list);
        }

        #[test]
        fn prop_in_place_matches_copy(values in prop::collection::vec(any::<u8>(), 0..64)) {
            let list = List::from(values);
            let mut in_place = list.clone();
            in_place.reverse_in_place();
            prop_assert_eq!(in_place, list.reverse());
        }
    }
}

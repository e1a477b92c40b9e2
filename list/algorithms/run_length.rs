use std::iter;

use crate::list::element::Encoded;
use crate::list::list::List;
use crate::list::node::Node;

/// 游程相关算法
///
/// 游程（run）是由相等元素组成的最长连续子序列。
impl<T: PartialEq + Clone> List<T> {
    /// 消除连续重复元素 (P08)，每个游程保留一个代表，顺序不变
    pub fn compress(&self) -> List<T> {
        self.runs().map(|(_, value)| value.clone()).collect()
    }

    /// 把连续重复元素打包为子链表 (P09)
    ///
    /// 空链表打包后仍是空链表。
    pub fn pack(&self) -> List<List<T>> {
        Pack {
            next: self.head_node(),
        }
        .collect()
    }

    /// 游程编码 (P10)，基于 `pack` 的结果
    pub fn encode(&self) -> List<(usize, T)> {
        self.pack()
            .into_iter()
            .filter_map(|run| {
                let count = run.len();
                run.into_iter().next().map(|value| (count, value))
            })
            .collect()
    }

    /// 改进的游程编码 (P11)：只出现一次的元素直接保留
    pub fn encode_modified(&self) -> List<Encoded<T>> {
        self.encode()
            .into_iter()
            .map(|(count, value)| match count {
                1 => Encoded::Single(value),
                _ => Encoded::Run(count, value),
            })
            .collect()
    }

    /// 直接游程编码 (P13)
    ///
    /// 与 `encode` 的输出相同，但单趟计数，不构造 `pack` 的中间结果。
    pub fn encode_direct(&self) -> List<(usize, T)> {
        self.runs()
            .map(|(count, value)| (count, value.clone()))
            .collect()
    }
}

impl<T: PartialEq> List<T> {
    /// 按顺序遍历所有游程，产出 `(长度, 代表元素)`
    pub fn runs(&self) -> Runs<'_, T> {
        Runs {
            next: self.head_node(),
        }
    }
}

impl<T: Clone> List<(usize, T)> {
    /// 游程解码 (P12)，`encode` 的逆运算
    pub fn decode(&self) -> List<T> {
        self.iter()
            .flat_map(|(count, value)| iter::repeat(value).take(*count).cloned())
            .collect()
    }
}

impl<T: Clone> List<Encoded<T>> {
    /// 解码 `encode_modified` 的结果
    pub fn decode_modified(&self) -> List<T> {
        self.iter()
            .flat_map(|item| iter::repeat(item.value()).take(item.count()).cloned())
            .collect()
    }
}

/// 游程迭代器
pub struct Runs<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T: PartialEq> Iterator for Runs<'a, T> {
    type Item = (usize, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.next?;
        let mut count = 1;
        let mut current = first.next.as_deref();

        while let Some(node) = current {
            if node.value != first.value {
                break;
            }
            count += 1;
            current = node.next.as_deref();
        }

        self.next = current;
        Some((count, &first.value))
    }
}

/// 打包迭代器，每次产出一个游程的副本
struct Pack<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T: PartialEq + Clone> Iterator for Pack<'a, T> {
    type Item = List<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.next?;
        let mut run = vec![first.value.clone()];
        let mut current = first.next.as_deref();

        while let Some(node) = current {
            if node.value != first.value {
                break;
            }
            run.push(node.value.clone());
            current = node.next.as_deref();
        }

        self.next = current;
        Some(List::from(run))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list;
    use proptest::prelude::*;

    fn letters() -> List<&'static str> {
        list!["a", "a", "a", "a", "b", "c", "c", "a", "a", "d", "e", "e", "e", "e"]
    }

    #[test]
    fn test_compress() {
        assert_eq!(letters().compress(), list!["a", "b", "c", "a", "d", "e"]);
        assert_eq!(list![1, 1, 2, 3, 5, 8].compress(), list![1, 2, 3, 5, 8]);
        assert_eq!(list!["a"].compress(), list!["a"]);
        assert!(List::<i32>::new().compress().is_empty());
    }

    #[test]
    fn test_pack() {
        assert_eq!(
            list!["a", "a", "a", "a", "b", "c", "c"].pack(),
            list![list!["a", "a", "a", "a"], list!["b"], list!["c", "c"]]
        );
        assert_eq!(
            letters().pack(),
            list![
                list!["a", "a", "a", "a"],
                list!["b"],
                list!["c", "c"],
                list!["a", "a"],
                list!["d"],
                list!["e", "e", "e", "e"]
            ]
        );
        assert!(List::<i32>::new().pack().is_empty());
    }

    #[test]
    fn test_encode() {
        assert_eq!(
            list!["a", "a", "a", "a", "b", "c", "c"].encode(),
            list![(4, "a"), (1, "b"), (2, "c")]
        );
        assert_eq!(
            list![1, 1, 2, 3, 5, 8].encode(),
            list![(2, 1), (1, 2), (1, 3), (1, 5), (1, 8)]
        );
        assert_eq!(list!["a"].encode(), list![(1, "a")]);
    }

    #[test]
    fn test_encode_modified() {
        assert_eq!(
            letters().encode_modified(),
            list![
                Encoded::Run(4, "a"),
                Encoded::Single("b"),
                Encoded::Run(2, "c"),
                Encoded::Run(2, "a"),
                Encoded::Single("d"),
                Encoded::Run(4, "e")
            ]
        );
        assert_eq!(list!["a"].encode_modified(), list![Encoded::Single("a")]);
    }

    #[test]
    fn test_decode() {
        let encoded: List<(usize, &str)> =
            list![(4, "a"), (1, "b"), (2, "c"), (2, "a"), (1, "d"), (4, "e")];
        assert_eq!(encoded.decode(), letters());

        let with_zero: List<(usize, &str)> = list![(0, "x"), (2, "y")];
        assert_eq!(with_zero.decode(), list!["y", "y"]);
    }

    #[test]
    fn test_decode_modified() {
        assert_eq!(letters().encode_modified().decode_modified(), letters());
    }

    #[test]
    fn test_encode_direct_matches_encode() {
        assert_eq!(letters().encode_direct(), letters().encode());
        assert_eq!(
            list![1, 1, 2, 3, 5, 8].encode_direct(),
            list![(2, 1), (1, 2), (1, 3), (1, 5), (1, 8)]
        );
        assert!(List::<i32>::new().encode_direct().is_empty());
    }

    #[test]
    fn test_runs() {
        let list = list![7, 7, 1, 7];
        let runs: Vec<_> = list.runs().collect();
        assert_eq!(runs, vec![(2, &7), (1, &1), (1, &7)]);
    }

    proptest! {
        #[test]
        fn prop_decode_inverts_encode(values in prop::collection::vec(0u8..4, 0..64)) {
            let list = List::from(values);
            prop_assert_eq!(list.encode().decode(), list.clone());
            prop_assert_eq!(list.encode_modified().decode_modified(), list.clone());
            prop_assert_eq!(list.encode_direct(), list.encode());
        }

        #[test]
        fn prop_pack_flattens_back(values in prop::collection::vec(0u8..3, 0..64)) {
            let list = List::from(values);
            let packed = list.pack();
            prop_assert_eq!(packed.len(), list.compress().len());

            let mut rebuilt = List::new();
            for run in packed {
                rebuilt.append(run);
            }
            prop_assert_eq!(rebuilt, list);
        }
    }
}

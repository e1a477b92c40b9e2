use std::iter;

use rand::Rng;
use tracing::trace;

use crate::list::error::ListError;
use crate::list::list::List;

/// 随机算法
///
/// 随机源由调用方传入，测试时使用固定种子的 `StdRng` 即可复现结果。
impl<T: Clone> List<T> {
    /// 不放回地随机抽取 `amount` 个元素 (P23)
    ///
    /// 在逐渐缩短的副本上反复做均匀随机的 `remove_at`，结果按抽取顺序排列。
    /// `amount` 超过长度时抽完即止，返回较短的结果。
    pub fn random_select<R: Rng + ?Sized>(&self, amount: usize, rng: &mut R) -> List<T> {
        let mut remaining = self.clone();
        let mut length = remaining.len();

        iter::from_fn(|| {
            if length == 0 {
                return None;
            }
            let index = rng.gen_range(0..length);
            trace!(index, length, "random draw");
            length -= 1;
            remaining.remove_at_in_place(index)
        })
        .take(amount)
        .collect()
    }

    /// 随机排列 (P25)，即抽取全部元素
    pub fn random_permute<R: Rng + ?Sized>(&self, rng: &mut R) -> List<T> {
        self.random_select(self.len(), rng)
    }
}

impl List<i64> {
    /// 乐透 (P24)：从 `1..=maximum` 中抽取 `numbers` 个不同的数
    ///
    /// # 错误
    /// `maximum < 1` 时返回 `range` 的 `ListError::InvalidArgument`
    pub fn lotto<R: Rng + ?Sized>(
        numbers: usize,
        maximum: i64,
        rng: &mut R,
    ) -> Result<List<i64>, ListError> {
        Ok(List::range(1, maximum)?.random_select(numbers, rng))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sorted<T: Ord + Clone>(list: &List<T>) -> Vec<T> {
        let mut values: Vec<T> = list.iter().cloned().collect();
        values.sort();
        values
    }

    #[test]
    fn test_random_select() {
        let mut rng = StdRng::seed_from_u64(42);
        let source = list!["a", "b", "c", "d", "e", "f", "g", "h"];

        let picked = source.random_select(3, &mut rng);
        assert_eq!(picked.len(), 3);
        assert!(picked.iter().all(|value| source.iter().any(|s| s == value)));

        let mut unique = sorted(&picked);
        unique.dedup();
        assert_eq!(unique.len(), 3);
    }

    #[test]
    fn test_random_select_exhausts() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(list!["a"].random_select(3, &mut rng), list!["a"]);
        assert!(List::<i32>::new().random_select(3, &mut rng).is_empty());
        assert!(list![1, 2].random_select(0, &mut rng).is_empty());
    }

    #[test]
    fn test_random_select_is_reproducible() {
        let source = list![1, 1, 2, 3, 5, 8];
        let first = source.random_select(4, &mut StdRng::seed_from_u64(2024));
        let second = source.random_select(4, &mut StdRng::seed_from_u64(2024));
        assert_eq!(first, second);
    }

    #[test]
    fn test_random_select_reaches_every_position() {
        let mut rng = StdRng::seed_from_u64(99);
        let source = list![0, 1, 2, 3];
        let mut seen = [0usize; 4];

        for _ in 0..400 {
            let picked = source.random_select(1, &mut rng);
            if let Ok(value) = picked.last() {
                seen[*value as usize] += 1;
            }
        }

        // 均匀抽样时每个位置大约出现 100 次
        assert!(seen.iter().all(|count| *count > 50), "{:?}", seen);
    }

    #[test]
    fn test_lotto() {
        let mut rng = StdRng::seed_from_u64(6);
        let draw = List::lotto(6, 49, &mut rng).expect("Failed to draw lotto numbers");
        assert_eq!(draw.len(), 6);
        assert!(draw.iter().all(|n| (1..=49).contains(n)));

        let mut unique = sorted(&draw);
        unique.dedup();
        assert_eq!(unique.len(), 6);

        assert!(List::lotto(3, 0, &mut rng).is_err());
    }

    #[test]
    fn test_random_permute() {
        let mut rng = StdRng::seed_from_u64(1);
        let source = list!["a", "b", "c", "d", "e", "f"];
        let permuted = source.random_permute(&mut rng);
        assert_eq!(permuted.len(), source.len());
        assert_eq!(sorted(&permuted), sorted(&source));
    }

    proptest! {
        #[test]
        fn prop_random_select_is_sub_multiset(
            values in prop::collection::vec(0u8..8, 0..32),
            amount in 0usize..40,
            seed in any::<u64>(),
        ) {
            let source = List::from(values.clone());
            let picked = source.random_select(amount, &mut StdRng::seed_from_u64(seed));
            prop_assert_eq!(picked.len(), amount.min(values.len()));

            let mut pool = values;
            for value in picked.iter() {
                let position = pool.iter().position(|v| v == value);
                prop_assert!(position.is_some());
                if let Some(position) = position {
                    pool.swap_remove(position);
                }
            }
        }
    }
}

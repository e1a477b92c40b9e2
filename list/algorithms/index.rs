use std::iter;

use tracing::debug;

use crate::list::error::ListError;
use crate::list::list::List;

/// 按位置操作的算法
///
/// 越界的索引一律截断处理或返回 `None`，不会报错。
impl<T: Clone> List<T> {
    /// 每个元素重复两次 (P14)
    pub fn duplicate(&self) -> List<T> {
        self.duplicate_n(2)
    }

    /// 每个元素连续重复 `times` 次 (P15)，`times = 0` 得到空链表
    pub fn duplicate_n(&self, times: usize) -> List<T> {
        self.iter()
            .flat_map(|value| iter::repeat(value).take(times).cloned())
            .collect()
    }

    /// 删除所有 1 起始位置为 `every` 倍数的元素 (P16)
    ///
    /// # 错误
    /// `every == 0` 返回 `ListError::InvalidArgument`
    pub fn drop_every(&self, every: usize) -> Result<List<T>, ListError> {
        if every == 0 {
            debug!(every, "drop_every rejected");
            return Err(ListError::InvalidArgument(
                "drop_every requires every >= 1".to_string(),
            ));
        }

        Ok(self
            .iter()
            .enumerate()
            .filter(|(index, _)| (index + 1) % every != 0)
            .map(|(_, value)| value.clone())
            .collect())
    }

    /// 把链表分成两段 (P17)
    ///
    /// 前一段长度为 `min(at, len)`，其余元素组成后一段。
    pub fn split(&self, at: usize) -> (List<T>, List<T>) {
        let prefix = self.iter().take(at).cloned().collect();
        let suffix = self.iter().skip(at).cloned().collect();
        (prefix, suffix)
    }

    /// 提取半开区间 `[from, to)` 内的元素 (P18)，区间外的部分直接忽略
    pub fn slice(&self, from: usize, to: usize) -> List<T> {
        self.iter()
            .skip(from)
            .take(to.saturating_sub(from))
            .cloned()
            .collect()
    }

    /// 向左旋转 `amount` 位 (P19)，负数向右旋转
    ///
    /// 在 `(n + amount mod n) mod n` 处分割，再把后一段接到前一段之前。
    pub fn rotate(&self, amount: isize) -> List<T> {
        let len = self.len();
        if len == 0 {
            return List::new();
        }

        let at = amount.rem_euclid(len as isize) as usize;
        let (prefix, mut suffix) = self.split(at);
        suffix.append(prefix);
        suffix
    }

    /// 删除第 `position` 个元素 (P20)，从 0 开始计数
    ///
    /// 返回剩余元素组成的新链表以及被删除的元素；越界时返回原链表的副本和 `None`。
    pub fn remove_at(&self, position: usize) -> (List<T>, Option<T>) {
        let mut remaining = self.clone();
        let removed = remaining.remove_at_in_place(position);
        (remaining, removed)
    }

    /// 在位置 `index` 插入元素 (P21)
    ///
    /// 新元素出现在结果的第 `index` 个位置（从 0 开始），即插在 1 起始的
    /// 第 `index` 个元素之后；`index` 超过长度时追加到末尾。原链表不变。
    pub fn insert_at(&self, index: usize, value: T) -> List<T> {
        self.iter()
            .take(index)
            .cloned()
            .chain(iter::once(value))
            .chain(self.iter().skip(index).cloned())
            .collect()
    }
}

impl<T> List<T> {
    /// 原地删除第 `position` 个元素，越界时链表不变并返回 `None`
    pub fn remove_at_in_place(&mut self, position: usize) -> Option<T> {
        let mut slot = self.head_mut();
        for _ in 0..position {
            slot = &mut slot.as_mut()?.next;
        }

        let (value, next) = slot.take()?.into_parts();
        *slot = next;
        Some(value)
    }
}

impl List<i64> {
    /// 闭区间 `from..=to` 内的所有整数 (P22)
    ///
    /// # 错误
    /// `from > to` 返回 `ListError::InvalidArgument`
    pub fn range(from: i64, to: i64) -> Result<List<i64>, ListError> {
        if from > to {
            debug!(from, to, "range rejected");
            return Err(ListError::InvalidArgument(format!(
                "range start {} is greater than end {}",
                from, to
            )));
        }
        Ok((from..=to).collect())
    }
}

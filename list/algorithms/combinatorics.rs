use std::collections::HashMap;

use tracing::debug;

use crate::list::list::List;
use crate::list::node::Node;

/// 组合生成相关算法
impl<T: Clone> List<T> {
    /// 从链表中选出 `k` 个元素的所有组合 (P26)
    ///
    /// 依次选定第 i 个元素，再与它之后元素的 `k - 1` 组合拼接，
    /// 因此同一子集只会以源顺序出现一次。
    /// `k = 0` 得到一个空组合，`k > len` 得到空结果。
    pub fn combinations(&self, k: usize) -> List<List<T>> {
        let combinations = combine(self.head_node(), k);
        debug!(k, count = combinations.len(), "generated combinations");
        combinations.into_iter().map(cloned_list).collect()
    }

    /// 从链表中选出 `k` 个元素的所有排列 (P26B)
    ///
    /// 与 `combinations` 结构相同，但选定元素后与其余全部元素的 `k - 1` 排列拼接，
    /// 结果数量为 `n! / (n - k)!`。
    pub fn permutations(&self, k: usize) -> List<List<T>> {
        let pool: List<&T> = self.iter().collect();
        let permutations = arrange(&pool, k);
        debug!(k, count = permutations.len(), "generated permutations");
        permutations.into_iter().map(cloned_list).collect()
    }

    /// 把元素分成给定大小的互不相交的组 (P27)
    ///
    /// 组的先后顺序有意义，组内顺序无意义；不在任何组中的元素被忽略。
    /// 各组大小之和超过长度时结果为空。
    pub fn group(&self, sizes: &[usize]) -> List<List<List<T>>> {
        let pool: List<&T> = self.iter().collect();
        let groupings = partition(&pool, sizes);
        debug!(?sizes, count = groupings.len(), "generated groupings");
        groupings
            .into_iter()
            .map(|groups| groups.into_iter().map(cloned_list).collect())
            .collect()
    }
}

impl<T: Clone> List<List<T>> {
    /// 按子链表长度稳定排序 (P28a)
    pub fn lsort(&self) -> List<List<T>> {
        let mut sublists: Vec<&List<T>> = self.iter().collect();
        sublists.sort_by_key(|sublist| sublist.len());
        sublists.into_iter().cloned().collect()
    }

    /// 按子链表长度出现的频率稳定排序 (P28b)，长度越罕见越靠前
    pub fn lsort_freq(&self) -> List<List<T>> {
        let mut frequencies: HashMap<usize, usize> = HashMap::new();
        for sublist in self.iter() {
            *frequencies.entry(sublist.len()).or_insert(0) += 1;
        }

        let mut sublists: Vec<(usize, &List<T>)> = self
            .iter()
            .map(|sublist| (frequencies[&sublist.len()], sublist))
            .collect();
        sublists.sort_by_key(|(frequency, _)| *frequency);
        sublists.into_iter().map(|(_, sublist)| sublist.clone()).collect()
    }
}

fn cloned_list<T: Clone>(list: List<&T>) -> List<T> {
    list.into_iter().cloned().collect()
}

/// 递归生成组合：从 `start` 开始的节点链中选 `k` 个
fn combine<T>(start: Option<&Node<T>>, k: usize) -> Vec<List<&T>> {
    if k == 0 {
        return vec![List::new()];
    }

    let mut result = Vec::new();
    let mut current = start;
    while let Some(node) = current {
        for mut rest in combine(node.next.as_deref(), k - 1) {
            rest.push_front(&node.value);
            result.push(rest);
        }
        current = node.next.as_deref();
    }
    result
}

/// 递归生成排列：选定一个元素后在其余元素中继续选择
fn arrange<'a, T>(pool: &List<&'a T>, k: usize) -> Vec<List<&'a T>> {
    if k == 0 {
        return vec![List::new()];
    }

    let mut result = Vec::new();
    for (index, value) in pool.iter().enumerate() {
        let (others, _) = pool.remove_at(index);
        for mut rest in arrange(&others, k - 1) {
            rest.push_front(*value);
            result.push(rest);
        }
    }
    result
}

/// 递归分组：第一组取 `sizes[0]` 个元素的每种组合，剩余元素继续分组
fn partition<'a, T>(pool: &List<&'a T>, sizes: &[usize]) -> Vec<List<List<&'a T>>> {
    let Some((&size, rest)) = sizes.split_first() else {
        return vec![List::new()];
    };

    let positions: List<usize> = (0..pool.len()).collect();
    let mut result = Vec::new();

    for chosen in positions.combinations(size) {
        let mut group = List::new();
        let mut remaining = List::new();
        for (position, value) in pool.iter().enumerate() {
            if chosen.iter().any(|&p| p == position) {
                group.push_front(*value);
            } else {
                remaining.push_front(*value);
            }
        }
        group.reverse_in_place();
        remaining.reverse_in_place();

        for mut groups in partition(&remaining, rest) {
            groups.push_front(group.clone());
            result.push(groups);
        }
    }
    result
}

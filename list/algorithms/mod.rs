// 链表算法模块
//
// 这个模块按题目分组实现链表的算法目录，每个子模块都是 `impl List<T>` 的一部分：
// - structure: 反转、展平、回文判断 (P05-P07)
// - run_length: 压缩、打包与游程编码/解码 (P08-P13)
// - index: 复制、删除、分割、切片、旋转、按位置插入/删除、区间 (P14-P22)
// - random: 随机抽取、乐透、随机排列 (P23-P25)
// - combinatorics: 组合、排列、分组与按长度排序 (P26-P28)

pub mod combinatorics;
pub mod index;
pub mod random;
pub mod run_length;
pub mod structure;

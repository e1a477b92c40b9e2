//! 逻辑运算与真值表 (P46)

use std::fmt;

pub fn and(a: bool, b: bool) -> bool {
    a && b
}

pub fn or(a: bool, b: bool) -> bool {
    a || b
}

pub fn nand(a: bool, b: bool) -> bool {
    !and(a, b)
}

pub fn nor(a: bool, b: bool) -> bool {
    !or(a, b)
}

pub fn xor(a: bool, b: bool) -> bool {
    a != b
}

pub fn implies(a: bool, b: bool) -> bool {
    or(!a, b)
}

pub fn equ(a: bool, b: bool) -> bool {
    a == b
}

/// 真值表中的一行
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TruthRow {
    pub a: bool,
    pub b: bool,
    pub result: bool,
}

impl fmt::Display for TruthRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}",
            u8::from(self.a),
            u8::from(self.b),
            u8::from(self.result)
        )
    }
}

/// 表头，与 `TruthRow` 的列对应
pub const TABLE_HEADER: &str = "A\tB\tResult";

/// 两变量表达式的真值表，按 FF、FT、TF、TT 的顺序
pub fn table<F: Fn(bool, bool) -> bool>(expression: F) -> Vec<TruthRow> {
    [(false, false), (false, true), (true, false), (true, true)]
        .into_iter()
        .map(|(a, b)| TruthRow {
            a,
            b,
            result: expression(a, b),
        })
        .collect()
}

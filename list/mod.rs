pub mod algorithms;
pub mod element;
pub mod error;
#[allow(clippy::module_inception)]
pub mod list;
pub mod node;

// 重新导出主要类型
pub use algorithms::run_length::Runs;
pub use element::{Encoded, Nested};
pub use error::ListError;
pub use list::{IntoIter, Iter, IterMut, List};
pub use node::Node;

/// 按字面值构建链表
///
/// ```
/// use ninety_nine::{list, List};
///
/// let fib: List<i32> = list![1, 1, 2, 3, 5, 8];
/// assert_eq!(fib.len(), 6);
/// ```
#[macro_export]
macro_rules! list {
    () => {
        $crate::list::List::new()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::list::List::from_values([$($value),+])
    };
}

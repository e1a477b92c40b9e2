/// 链表算法错误类型
///
/// 可预期的边界情况（索引越界、采样数量超过长度等）通过 `Option`
/// 或截断处理，这里只保留结构上无效的输入。
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ListError {
    #[error("List is empty")]
    EmptyList,
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

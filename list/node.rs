/// 单链表节点
///
/// 每个节点独占地拥有它的后继节点（`next`），链表中不存在反向引用，
/// 因此也不可能形成环。
#[derive(Debug)]
pub struct Node<T> {
    /// 节点保存的值
    pub value: T,

    /// 后继节点，`None` 表示链表结尾
    pub next: Option<Box<Node<T>>>,
}

impl<T> Node<T> {
    /// 创建没有后继的新节点
    pub fn new(value: T) -> Self {
        Node { value, next: None }
    }

    /// 创建指向给定后继的新节点
    pub fn with_next(value: T, next: Option<Box<Node<T>>>) -> Self {
        Node { value, next }
    }

    /// 检查是否为链表的最后一个节点
    pub fn is_tail(&self) -> bool {
        self.next.is_none()
    }

    /// 拆出节点的值与后继
    pub fn into_parts(self) -> (T, Option<Box<Node<T>>>) {
        (self.value, self.next)
    }
}

use crate::node::Node;

/// Walks a subtree in-order (left subtree, node, right subtree) yielding each node's value.
///
/// This keeps its own stack of pending ancestors instead of recursing so walking a degenerate
/// chain doesn't grow the call stack.
pub(crate) struct InOrder<'a> {
    /// Nodes whose left subtree is being (or has been) walked but which haven't been yielded
    /// yet. The top of the stack is always the next node to yield.
    stack: Vec<&'a Node>,
}

impl<'a> InOrder<'a> {
    pub(crate) fn new(root: Option<&'a Node>) -> Self {
        let mut walk = Self { stack: Vec::new() };
        walk.push_left_spine(root);
        walk
    }

    /// Pushes `node` and all of its left descendants. The last one pushed has no left child
    /// so it is the smallest remaining node.
    fn push_left_spine(&mut self, mut node: Option<&'a Node>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a> Iterator for InOrder<'a> {
    type Item = i32;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(node.value())
    }
}

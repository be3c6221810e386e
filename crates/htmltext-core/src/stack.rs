//! Stack of currently open elements

/// LIFO of open tag names, in nesting order.
#[derive(Debug, Default, Clone)]
pub struct TagStack {
    tags: Vec<String>,
}

impl TagStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, tag: impl Into<String>) {
        self.tags.push(tag.into());
    }

    /// Remove and return the innermost open tag, or `None` when nothing is open
    pub fn pop(&mut self) -> Option<String> {
        self.tags.pop()
    }

    /// The innermost open tag, or `""` when nothing is open
    pub fn peek(&self) -> &str {
        self.tags.last().map_or("", String::as_str)
    }

    pub fn depth(&self) -> usize {
        self.tags.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_pop_order() {
        let mut stack = TagStack::new();
        stack.push("html");
        stack.push("body");
        stack.push("p");
        assert_eq!(stack.depth(), 3);
        assert_eq!(stack.pop().as_deref(), Some("p"));
        assert_eq!(stack.pop().as_deref(), Some("body"));
        assert_eq!(stack.pop().as_deref(), Some("html"));
        assert_eq!(stack.pop(), None);
    }

    #[test]
    fn test_peek_empty() {
        let mut stack = TagStack::new();
        assert_eq!(stack.peek(), "");
        stack.push("div");
        assert_eq!(stack.peek(), "div");
        assert_eq!(stack.depth(), 1);
    }
}

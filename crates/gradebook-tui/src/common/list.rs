/// Cursor over a list whose length changes between fetches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListCursor {
    index: usize,
}

impl ListCursor {
    pub fn index(self) -> usize {
        self.index
    }

    pub fn move_up(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    pub fn move_down(&mut self, len: usize) {
        if self.index + 1 < len {
            self.index += 1;
        }
    }

    /// Keeps the cursor inside `0..len` after a reload.
    pub fn clamp(&mut self, len: usize) {
        self.index = self.index.min(len.saturating_sub(1));
    }

    pub fn current<T>(self, items: &[T]) -> Option<&T> {
        items.get(self.index)
    }
}

/// Fixed-capacity ring queue. Pushing onto a full queue drops the oldest entry.
pub(crate) struct BufferFIFO<T, const N: usize> {
    buffer: [T; N],
    /// Next write slot
    head: usize,
    len: usize,
}

impl<T, const N: usize> BufferFIFO<T, N>
where
    T: Default + Copy,
{
    pub fn new() -> Self {
        Self {
            buffer: [T::default(); N],
            head: 0,
            len: 0,
        }
    }

    pub fn push(&mut self, value: T) {
        if N == 0 {
            return;
        }
        self.buffer[self.head] = value;
        self.head = (self.head + 1) % N;
        if self.len < N {
            self.len += 1;
        }
    }

    /// Removes and returns the oldest entry.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        let value = self.buffer[(self.head + N - self.len) % N];
        self.len -= 1;
        Some(value)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_full(&self) -> bool {
        self.len == N
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

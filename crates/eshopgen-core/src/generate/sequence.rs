/// A run-wide identifier counter.
///
/// Order items are numbered across all orders rather than per order, so the
/// counter is threaded through the whole order-item stage instead of being
/// reset inside its loop.
#[derive(Debug)]
pub struct IdSequence {
    next: i64,
    start: i64,
}

impl IdSequence {
    pub fn starting_at(start: i64) -> Self {
        Self { next: start, start }
    }

    /// Hand out the next id.
    pub fn next_id(&mut self) -> i64 {
        let id = self.next;
        self.next += 1;
        id
    }

    /// Number of ids handed out so far.
    pub fn issued(&self) -> usize {
        (self.next - self.start) as usize
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_is_contiguous() {
        let mut seq = IdSequence::default();
        let ids: Vec<i64> = (0..5).map(|_| seq.next_id()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        assert_eq!(seq.issued(), 5);
    }

    #[test]
    fn test_sequence_custom_start() {
        let mut seq = IdSequence::starting_at(100);
        assert_eq!(seq.next_id(), 100);
        assert_eq!(seq.next_id(), 101);
        assert_eq!(seq.issued(), 2);
    }
}

//! Fixed-capacity window of recent samples

use std::time::Duration;

pub struct RingBuffer<T> {
    samples: Vec<T>,
    capacity: usize,
    next: usize,
}

impl<T: Copy> RingBuffer<T> {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            samples: Vec::with_capacity(capacity),
            capacity,
            next: 0,
        }
    }

    /// Add a sample, overwriting the oldest once full.
    pub fn push(&mut self, sample: T) {
        if self.samples.len() < self.capacity {
            self.samples.push(sample);
        } else {
            self.samples[self.next] = sample;
        }
        self.next = (self.next + 1) % self.capacity;
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn clear(&mut self) {
        self.samples.clear();
        self.next = 0;
    }
}

impl RingBuffer<Duration> {
    pub fn average(&self) -> Duration {
        if self.samples.is_empty() {
            return Duration::ZERO;
        }
        self.samples.iter().sum::<Duration>() / self.samples.len() as u32
    }

    pub fn min_max(&self) -> (Duration, Duration) {
        let min = self.samples.iter().min().copied().unwrap_or_default();
        let max = self.samples.iter().max().copied().unwrap_or_default();
        (min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_only_the_latest_window() {
        let mut buffer = RingBuffer::new(3);
        assert_eq!(buffer.average(), Duration::ZERO);

        buffer.push(Duration::from_millis(10));
        buffer.push(Duration::from_millis(20));
        assert_eq!(buffer.average(), Duration::from_millis(15));

        buffer.push(Duration::from_millis(30));
        buffer.push(Duration::from_millis(40)); // evicts 10
        assert_eq!(buffer.len(), 3);
        assert_eq!(buffer.average(), Duration::from_millis(30));
        assert_eq!(
            buffer.min_max(),
            (Duration::from_millis(20), Duration::from_millis(40))
        );
    }

    #[test]
    fn zero_capacity_still_holds_one_sample() {
        let mut buffer = RingBuffer::new(0);
        buffer.push(Duration::from_millis(5));
        buffer.push(Duration::from_millis(7));
        assert_eq!(buffer.len(), 1);
        assert_eq!(buffer.average(), Duration::from_millis(7));
    }
}

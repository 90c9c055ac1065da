//! Virtual clock for driving timer sequences in tests.

pub struct Timeline<T> {
    now: u64,
    seq: u64,
    pending: Vec<Entry<T>>,
}

struct Entry<T> {
    due: u64,
    seq: u64,
    item: T,
}

impl<T> Timeline<T> {
    pub fn new() -> Self {
        Self {
            now: 0,
            seq: 0,
            pending: Vec::new(),
        }
    }

    pub fn now(&self) -> u64 {
        self.now
    }

    pub fn schedule(&mut self, delay_ms: u32, item: T) {
        self.seq += 1;
        self.pending.push(Entry {
            due: self.now + u64::from(delay_ms),
            seq: self.seq,
            item,
        });
    }

    /// Pop the earliest item due at or before `until`, moving the clock to
    /// its due time. When nothing is due the clock moves to `until`.
    pub fn pop_until(&mut self, until: u64) -> Option<T> {
        let next = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, e)| e.due <= until)
            .min_by_key(|(_, e)| (e.due, e.seq))
            .map(|(idx, _)| idx);

        match next {
            Some(idx) => {
                let entry = self.pending.remove(idx);
                self.now = self.now.max(entry.due);
                Some(entry.item)
            }
            None => {
                self.now = self.now.max(until);
                None
            }
        }
    }

    /// Advance by `ms`, returning everything that came due in order.
    pub fn advance(&mut self, ms: u64) -> Vec<T> {
        let until = self.now + ms;
        let mut fired = Vec::new();
        while let Some(item) = self.pop_until(until) {
            fired.push(item);
        }
        fired
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_in_due_then_schedule_order() {
        let mut tl = Timeline::new();
        tl.schedule(20, "b");
        tl.schedule(10, "a");
        tl.schedule(20, "c");

        assert!(tl.advance(9).is_empty());
        assert_eq!(tl.advance(1), vec!["a"]);
        assert_eq!(tl.advance(100), vec!["b", "c"]);
        assert_eq!(tl.now(), 110);
        assert_eq!(tl.pending(), 0);
    }
}

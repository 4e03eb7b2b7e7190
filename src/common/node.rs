use std::cmp::Ordering;

/// Position of a state in the open list.
///
/// `tie` is the secondary key: the h cost when ties prefer states closer to
/// the goal, zero when ties fall straight through to insertion order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct OpenKey {
    pub(crate) f_cost: usize,
    pub(crate) tie: usize,
    pub(crate) seq: u64,
}

impl Ord for OpenKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.f_cost
            .cmp(&other.f_cost)
            .then_with(|| self.tie.cmp(&other.tie))
            // Earlier discoveries first, seq is unique per search.
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

impl PartialOrd for OpenKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_open_key_order() {
        let mut open = BTreeSet::new();
        open.insert(OpenKey { f_cost: 5, tie: 3, seq: 0 });
        open.insert(OpenKey { f_cost: 5, tie: 1, seq: 2 });
        open.insert(OpenKey { f_cost: 4, tie: 4, seq: 3 });
        open.insert(OpenKey { f_cost: 5, tie: 1, seq: 1 });

        let order: Vec<u64> = std::iter::from_fn(|| open.pop_first().map(|k| k.seq)).collect();
        assert_eq!(order, vec![3, 1, 2, 0]);
    }
}

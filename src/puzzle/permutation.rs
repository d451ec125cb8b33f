/// A total bijection over facelet positions. Position `i` of the result of
/// applying it takes the facelet at `indices[i]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Permutation {
    indices: Box<[u8]>,
}

impl Permutation {
    /// Returns `None` unless `indices` contains each of `0..indices.len()`
    /// exactly once.
    pub fn new(indices: &[u8]) -> Option<Self> {
        let mut seen = vec![false; indices.len()];
        for &index in indices {
            let slot = seen.get_mut(usize::from(index))?;
            if *slot {
                return None;
            }
            *slot = true;
        }
        Some(Self {
            indices: indices.into(),
        })
    }

    pub fn indices(&self) -> &[u8] {
        &self.indices
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// The permutation equivalent to applying `self` and then `then`.
    pub fn then(&self, then: &Permutation) -> Permutation {
        let indices = then
            .indices
            .iter()
            .map(|&i| self.indices[usize::from(i)])
            .collect();
        Permutation { indices }
    }

    pub fn is_identity(&self) -> bool {
        self.indices
            .iter()
            .enumerate()
            .all(|(i, &index)| usize::from(index) == i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_bijections() {
        assert!(Permutation::new(&[0, 1, 2]).is_some());
        assert!(Permutation::new(&[2, 0, 1]).is_some());
        assert!(Permutation::new(&[0, 0, 2]).is_none());
        assert!(Permutation::new(&[0, 1, 3]).is_none());
    }

    #[test]
    fn composition_with_inverse_is_identity() {
        let cycle = Permutation::new(&[1, 2, 0]).unwrap();
        let back = Permutation::new(&[2, 0, 1]).unwrap();
        assert!(cycle.then(&back).is_identity());
        assert!(back.then(&cycle).is_identity());
        assert!(!cycle.then(&cycle).is_identity());
    }
}

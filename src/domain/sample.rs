use crate::domain::digest::digest;

/// Picks up to `count` distinct items from `candidates`, driven entirely by
/// `seed`. Draw `i` hashes `{seed}tag{i}` and removes the item at
/// `hash mod remaining` from a working copy.
pub fn sample<T: Clone>(candidates: &[T], seed: &str, count: usize) -> Vec<T> {
    let mut remaining = candidates.to_vec();
    let mut picked = Vec::with_capacity(count.min(remaining.len()));

    for i in 0..count {
        if remaining.is_empty() {
            break;
        }
        let hashed = digest(&format!("{seed}tag{i}"));
        let index = hashed.modulo(remaining.len() as u64) as usize;
        picked.push(remaining.remove(index));
    }

    picked
}

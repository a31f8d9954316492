//! Slide identity and index bounds.
//!
//! The engine never inspects slide contents. It only needs to know how many
//! slides exist and, when the host swaps the slide list, whether the slide on
//! screen is still the same one.

/// Ordered, index-stable list of slide keys. Unkeyed slides are `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideSet<K> {
    keys: Vec<Option<K>>,
}

impl<K> Default for SlideSet<K> {
    fn default() -> Self {
        Self { keys: Vec::new() }
    }
}

impl<K> SlideSet<K> {
    pub fn new(keys: Vec<Option<K>>) -> Self {
        Self { keys }
    }

    pub fn keyed(keys: impl IntoIterator<Item = K>) -> Self {
        Self {
            keys: keys.into_iter().map(Some).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn key(&self, index: usize) -> Option<&K> {
        self.keys.get(index).and_then(Option::as_ref)
    }

    /// Highest valid index; `0` for an empty set.
    pub fn index_max(&self) -> usize {
        self.keys.len().saturating_sub(1)
    }

    /// A set of `count` unkeyed slides.
    pub fn unkeyed(count: usize) -> Self {
        Self {
            keys: std::iter::repeat_with(|| None).take(count).collect(),
        }
    }
}

/// Decides whether two slide keys denote the same slide.
///
/// Supplied by the rendering collaborator; the engine never derives keys
/// itself.
pub trait SlideIdentity<K> {
    fn is_same_slide(&self, previous: &K, next: &K) -> bool;
}

impl<K, F> SlideIdentity<K> for F
where
    F: Fn(&K, &K) -> bool,
{
    fn is_same_slide(&self, previous: &K, next: &K) -> bool {
        self(previous, next)
    }
}

/// Identity by key equality.
pub fn keys_equal<K: PartialEq>(previous: &K, next: &K) -> bool {
    previous == next
}

/// Whether moving from `previous[previous_index]` to `next[next_index]`
/// keeps the same slide on screen, in which case the index change must not
/// be animated.
pub fn display_same_slide<K>(
    previous: &SlideSet<K>,
    previous_index: usize,
    next: &SlideSet<K>,
    next_index: usize,
    identity: &dyn SlideIdentity<K>,
) -> bool {
    if previous.is_empty() || next.is_empty() {
        return false;
    }
    match (previous.key(previous_index), next.key(next_index)) {
        (Some(old_key), Some(new_key)) => identity.is_same_slide(old_key, new_key),
        _ => false,
    }
}

/// Clamps an externally supplied index into `[0, count - 1]`.
///
/// An index outside `[0, count]` is a host bug and is reported with a
/// warning; `count` itself is tolerated because hosts commonly point one past
/// the end while appending a slide.
pub fn clamp_index(index: isize, count: usize) -> usize {
    if index < 0 || index as usize > count {
        log::warn!(
            "swipeable: the new index {} is out of bounds: [0-{}]",
            index,
            count
        );
    }
    let max = count.saturating_sub(1);
    if index < 0 {
        0
    } else {
        (index as usize).min(max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_key_at_new_index_is_same_slide() {
        let before = SlideSet::keyed(["a", "b", "c"]);
        let after = SlideSet::keyed(["z", "a", "b", "c"]);
        assert!(display_same_slide(&before, 0, &after, 1, &keys_equal::<&str>));
        assert!(!display_same_slide(&before, 0, &after, 0, &keys_equal::<&str>));
    }

    #[test]
    fn unkeyed_slides_are_never_the_same() {
        let before: SlideSet<String> = SlideSet::unkeyed(3);
        let after: SlideSet<String> = SlideSet::unkeyed(3);
        assert!(!display_same_slide(&before, 1, &after, 1, &keys_equal::<String>));
    }

    #[test]
    fn empty_sets_are_never_the_same() {
        let before: SlideSet<u32> = SlideSet::default();
        let after = SlideSet::keyed([1, 2]);
        assert!(!display_same_slide(&before, 0, &after, 0, &keys_equal::<u32>));
    }

    #[test]
    fn custom_identity_is_used() {
        let before = SlideSet::keyed(["Intro", "Body"]);
        let after = SlideSet::keyed(["intro", "body"]);
        let case_insensitive = |a: &&str, b: &&str| a.eq_ignore_ascii_case(b);
        assert!(display_same_slide(&before, 1, &after, 1, &case_insensitive));
    }

    #[test]
    fn clamp_index_keeps_valid_values() {
        assert_eq!(clamp_index(0, 3), 0);
        assert_eq!(clamp_index(2, 3), 2);
    }

    #[test]
    fn clamp_index_pulls_out_of_range_values_in() {
        assert_eq!(clamp_index(-4, 3), 0);
        assert_eq!(clamp_index(3, 3), 2);
        assert_eq!(clamp_index(99, 3), 2);
        assert_eq!(clamp_index(5, 0), 0);
    }

    #[test]
    fn index_max_of_empty_set_is_zero() {
        assert_eq!(SlideSet::<u8>::default().index_max(), 0);
        assert_eq!(SlideSet::keyed([1u8, 2, 3]).index_max(), 2);
    }
}

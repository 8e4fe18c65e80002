//! Slice helpers returning new vectors

/// New vector with `mapper` applied to every element of `input`.
pub fn map<I, O, F>(input: &[I], mapper: F) -> Vec<O>
where
    F: FnMut(&I) -> O,
{
    input.iter().map(mapper).collect()
}

/// New vector with the elements of `input` accepted by `condition`.
pub fn filter<T, P>(input: &[T], mut condition: P) -> Vec<T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    input.iter().filter(|item| condition(item)).cloned().collect()
}

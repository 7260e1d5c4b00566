//! Small helpers shared by the find operations

/// First element of a result list, `None` when it is empty
pub fn first_or_none<T>(items: Vec<T>) -> Option<T> {
    items.into_iter().next()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_or_none() {
        assert_eq!(first_or_none(vec![3, 4]), Some(3));
        assert_eq!(first_or_none::<u64>(Vec::new()), None);
    }
}

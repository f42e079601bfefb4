use std::iter::FusedIterator;

use crate::field::FieldDesc;

/// An iterator over the [`FieldDesc`]s of a [`crate::TupleDesc`].
///
/// Every call to [`crate::TupleDesc::iter`] returns a new cursor, so advancing one iterator
/// never moves another one obtained from the same descriptor.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    fields: &'a [FieldDesc],
    front: usize,
    back: usize,
}

impl<'a> Iter<'a> {
    pub(super) fn new(fields: &'a [FieldDesc]) -> Self {
        Self {
            fields,
            front: 0,
            back: fields.len(),
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a FieldDesc;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let field = &self.fields[self.front];
        self.front += 1;
        Some(field)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(&self.fields[self.back])
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::types::FieldType;

    fn fields() -> Vec<FieldDesc> {
        vec![
            FieldDesc::new(FieldType::Int, Some("id".to_string())),
            FieldDesc::new(FieldType::String, Some("name".to_string())),
            FieldDesc::anonymous(FieldType::Int),
        ]
    }

    #[test]
    fn test_should_iterate_in_order_and_stop() {
        let fields = fields();
        let mut iter = Iter::new(&fields);
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.next().and_then(FieldDesc::name), Some("id"));
        assert_eq!(iter.next().and_then(FieldDesc::name), Some("name"));
        assert_eq!(
            iter.next().map(FieldDesc::field_type),
            Some(FieldType::Int)
        );
        assert!(iter.next().is_none());
        // no wraparound
        assert!(iter.next().is_none());
        assert_eq!(iter.len(), 0);
    }

    #[test]
    fn test_should_iterate_from_both_ends() {
        let fields = fields();
        let mut iter = Iter::new(&fields);
        assert_eq!(iter.next_back().and_then(FieldDesc::name), None);
        assert_eq!(iter.next().and_then(FieldDesc::name), Some("id"));
        assert_eq!(iter.next_back().and_then(FieldDesc::name), Some("name"));
        assert!(iter.next().is_none());
        assert!(iter.next_back().is_none());
    }

    #[test]
    fn test_should_clone_independent_cursor() {
        let fields = fields();
        let mut iter = Iter::new(&fields);
        iter.next();
        let mut cloned = iter.clone();
        cloned.next();
        cloned.next();
        assert!(cloned.next().is_none());
        assert_eq!(iter.next().and_then(FieldDesc::name), Some("name"));
    }
}

//! Shape introspection implemented by every array type.

use crate::shape::Shape;

/// Common read-only view over any dense multidimensional array.
pub trait Dimensional {
    /// The array's shape.
    fn shape(&self) -> &Shape;

    /// Number of dimensions.
    fn rank(&self) -> usize {
        self.shape().rank()
    }

    /// Total number of elements.
    fn len(&self) -> usize {
        self.shape().len()
    }

    /// Always false for a constructed array; provided for container
    /// convention.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Per-axis lengths.
    fn dims(&self) -> &[usize] {
        self.shape().dims()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fake(Shape);

    impl Dimensional for Fake {
        fn shape(&self) -> &Shape {
            &self.0
        }
    }

    #[test]
    fn test_provided_methods() {
        let fake = Fake(Shape::new(&[2, 3]).unwrap());
        assert_eq!(fake.rank(), 2);
        assert_eq!(fake.len(), 6);
        assert_eq!(fake.dims(), &[2, 3]);
        assert!(!fake.is_empty());
    }
}

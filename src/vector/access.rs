//! Sequential reading and writing of vector components.

use super::Vector;
use crate::{error::Result, num::Scalar};
use std::{
    fmt,
    ops::{Shl, Shr},
};

/// Writes vector components in order, starting from a given position.
///
/// Writes are chained with `<<`, which panics when writing past the last
/// component, or with the checked [`write`](Self::write).
pub struct ComponentWriter<'a, T, const L: usize> {
    vector: &'a mut Vector<T, L>,
    position: usize,
}

/// Reads vector components in order.
///
/// Reads are chained with `>>`, which panics when reading past the last
/// component, or done with [`read`](Self::read) or as an [`Iterator`].
pub struct ComponentReader<'a, T, const L: usize> {
    vector: &'a Vector<T, L>,
    position: usize,
}

impl<'a, T: Scalar, const L: usize> ComponentWriter<'a, T, L> {
    pub(super) fn new(vector: &'a mut Vector<T, L>, position: usize) -> Self {
        Self { vector, position }
    }

    /// The index of the next component to be written.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// The number of components left to write.
    #[inline]
    pub fn remaining(&self) -> usize {
        L.saturating_sub(self.position)
    }

    /// Writes the next component.
    ///
    /// # Errors
    /// Returns [`MathError::IndexOutOfRange`](crate::MathError::IndexOutOfRange)
    /// if all components have been written.
    pub fn write(&mut self, value: T) -> Result<&mut Self> {
        *self.vector.at_mut(self.position)? = value;
        self.position += 1;
        Ok(self)
    }
}

impl<T: Scalar, const L: usize> Shl<T> for ComponentWriter<'_, T, L> {
    type Output = Self;

    fn shl(mut self, value: T) -> Self {
        self.vector[self.position] = value;
        self.position += 1;
        self
    }
}

impl<'a, T: Scalar, const L: usize> ComponentReader<'a, T, L> {
    pub(super) fn new(vector: &'a Vector<T, L>) -> Self {
        Self {
            vector,
            position: 0,
        }
    }

    /// The index of the next component to be read.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Reads the next component.
    ///
    /// # Errors
    /// Returns [`MathError::IndexOutOfRange`](crate::MathError::IndexOutOfRange)
    /// if all components have been read.
    pub fn read(&mut self) -> Result<T> {
        let value = *self.vector.at(self.position)?;
        self.position += 1;
        Ok(value)
    }
}

impl<T: Scalar, const L: usize> Shr<&mut T> for ComponentReader<'_, T, L> {
    type Output = Self;

    fn shr(mut self, target: &mut T) -> Self {
        *target = self.vector[self.position];
        self.position += 1;
        self
    }
}

impl<T: Scalar, const L: usize> Iterator for ComponentReader<'_, T, L> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.read().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = L.saturating_sub(self.position);
        (remaining, Some(remaining))
    }
}

impl<T: Scalar, const L: usize> ExactSizeIterator for ComponentReader<'_, T, L> {}

impl<T: Scalar, const L: usize> fmt::Debug for ComponentWriter<'_, T, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentWriter")
            .field("vector", &self.vector)
            .field("position", &self.position)
            .finish()
    }
}

impl<T: Scalar, const L: usize> fmt::Debug for ComponentReader<'_, T, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentReader")
            .field("vector", &self.vector)
            .field("position", &self.position)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::MathError,
        vector::{Vector3, Vector4},
    };

    #[test]
    fn checked_writes_stop_at_end() {
        let mut v = Vector3::zeros();
        let mut writer = v.writer();
        writer.write(1).unwrap().write(2).unwrap();
        assert_eq!(writer.remaining(), 1);
        writer.write(3).unwrap();
        assert_eq!(
            writer.write(4).err(),
            Some(MathError::IndexOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(v, Vector3::new(1, 2, 3));
    }

    #[test]
    #[should_panic]
    fn shifting_past_end_panics() {
        let mut v = Vector3::zeros();
        let _ = v.writer() << 1 << 2 << 3 << 4;
    }

    #[test]
    fn reader_yields_components_in_order() {
        let v = Vector4::new(4, 3, 2, 1);
        let mut reader = v.reader();
        assert_eq!(reader.read(), Ok(4));
        assert_eq!(reader.position(), 1);
        assert_eq!(reader.len(), 3);
        assert_eq!(reader.collect::<Vec<_>>(), vec![3, 2, 1]);
    }

    #[test]
    fn reading_past_end_fails() {
        let v = Vector3::new(1, 2, 3);
        let mut reader = v.reader();
        let mut first = 0;
        reader = reader >> &mut first;
        assert_eq!(first, 1);
        reader.read().unwrap();
        reader.read().unwrap();
        assert!(reader.read().is_err());
    }
}

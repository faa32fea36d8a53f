//! Strided views over band storage.
//!
//! A view is an index range with a fixed stride into the flat coefficient buffer of a
//! [`BandMatrix`](crate::matrix::BandMatrix). Diagonals are contiguous (stride 1);
//! columns step across diagonals (stride = number of columns). Views borrow the buffer,
//! so writes through a [`BandViewMut`] land directly in the matrix.

use std::ops::{Index, IndexMut};

/// Immutable strided view.
#[derive(Clone, Copy, Debug)]
pub struct BandView<'a, T> {
    data: &'a [T],
    offset: usize,
    len: usize,
    stride: usize,
}

/// Mutable strided view.
#[derive(Debug)]
pub struct BandViewMut<'a, T> {
    data: &'a mut [T],
    offset: usize,
    len: usize,
    stride: usize,
}

#[inline]
fn check_span(buf_len: usize, offset: usize, len: usize, stride: usize) {
    debug_assert!(stride > 0, "stride must be positive");
    if len > 0 {
        debug_assert!(offset + (len - 1) * stride < buf_len, "view exceeds buffer");
    } else {
        debug_assert!(offset <= buf_len, "empty view offset exceeds buffer");
    }
}

impl<'a, T> BandView<'a, T> {
    pub(crate) fn new(data: &'a [T], offset: usize, len: usize, stride: usize) -> Self {
        check_span(data.len(), offset, len, stride);
        Self { data, offset, len, stride }
    }

    /// Number of elements in the view.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Element `t`, or `None` past the end.
    pub fn get(&self, t: usize) -> Option<&'a T> {
        if t < self.len {
            Some(&self.data[self.offset + t * self.stride])
        } else {
            None
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a T> {
        let data: &'a [T] = self.data;
        data[self.offset..].iter().step_by(self.stride).take(self.len)
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Copy,
    {
        self.iter().copied().collect()
    }
}

impl<T> Index<usize> for BandView<'_, T> {
    type Output = T;
    fn index(&self, t: usize) -> &T {
        assert!(t < self.len, "view index {t} out of bounds (len {})", self.len);
        &self.data[self.offset + t * self.stride]
    }
}

impl<'a, T> BandViewMut<'a, T> {
    pub(crate) fn new(data: &'a mut [T], offset: usize, len: usize, stride: usize) -> Self {
        check_span(data.len(), offset, len, stride);
        Self { data, offset, len, stride }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Reborrow as an immutable view.
    pub fn as_ref(&self) -> BandView<'_, T> {
        BandView {
            data: &*self.data,
            offset: self.offset,
            len: self.len,
            stride: self.stride,
        }
    }

    pub fn get(&self, t: usize) -> Option<&T> {
        if t < self.len {
            Some(&self.data[self.offset + t * self.stride])
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, t: usize) -> Option<&mut T> {
        if t < self.len {
            Some(&mut self.data[self.offset + t * self.stride])
        } else {
            None
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.data[self.offset..].iter().step_by(self.stride).take(self.len)
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> + '_ {
        self.data[self.offset..]
            .iter_mut()
            .step_by(self.stride)
            .take(self.len)
    }

    /// Set every element of the view to `value`.
    pub fn fill(&mut self, value: T)
    where
        T: Copy,
    {
        self.iter_mut().for_each(|x| *x = value);
    }

    /// Copy `src` into the view. Panics if the lengths differ.
    pub fn copy_from_slice(&mut self, src: &[T])
    where
        T: Copy,
    {
        assert_eq!(src.len(), self.len, "source slice has incorrect length");
        for (dst, &s) in self.iter_mut().zip(src) {
            *dst = s;
        }
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Copy,
    {
        self.iter().copied().collect()
    }
}

impl<T> Index<usize> for BandViewMut<'_, T> {
    type Output = T;
    fn index(&self, t: usize) -> &T {
        assert!(t < self.len, "view index {t} out of bounds (len {})", self.len);
        &self.data[self.offset + t * self.stride]
    }
}

impl<T> IndexMut<usize> for BandViewMut<'_, T> {
    fn index_mut(&mut self, t: usize) -> &mut T {
        assert!(t < self.len, "view index {t} out of bounds (len {})", self.len);
        &mut self.data[self.offset + t * self.stride]
    }
}

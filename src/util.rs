/// Extension trait for slices
pub(crate) trait SliceExtension<T> {
    /// "Selects" an array out of a slice at a given index
    ///
    /// Effectively:
    /// ```text
    /// let array: &[T; N] = &slice[index..index+N]
    /// ```
    ///
    /// Returns `None` if the slice does not hold `N` elements from `index` onward.
    fn select_array<const N: usize>(&self, index: usize) -> Option<&[T; N]>;

    /// Like [`SliceExtension::select_array`], but only succeeds if the selected array reaches exactly to the end of the slice
    fn select_exact_array<const N: usize>(&self, index: usize) -> Option<&[T; N]>;
}

impl<T> SliceExtension<T> for [T] {
    fn select_array<const N: usize>(&self, index: usize) -> Option<&[T; N]> {
        let slice = self.get(index..index.checked_add(N)?)?;
        <&[T; N]>::try_from(slice).ok()
    }

    fn select_exact_array<const N: usize>(&self, index: usize) -> Option<&[T; N]> {
        if self.len().checked_sub(index)? == N {
            self.select_array(index)
        } else {
            None
        }
    }
}

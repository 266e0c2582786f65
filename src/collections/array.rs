/// Slice helpers for resetting and copying buffers.
pub trait SliceExt<T> {
    /// Overwrite every element with `T::default()` in place.
    fn self_set_to_defaults(&mut self)
    where
        T: Default;

    /// New buffer of the same length holding only default values.
    ///
    /// The source is left untouched.
    fn set_to_defaults(&self) -> Vec<T>
    where
        T: Default;

    /// Element-wise copy of the slice.
    fn clone_array(&self) -> Vec<T>
    where
        T: Clone;
}

impl<T> SliceExt<T> for [T] {
    fn self_set_to_defaults(&mut self)
    where
        T: Default,
    {
        self.fill_with(T::default);
    }

    fn set_to_defaults(&self) -> Vec<T>
    where
        T: Default,
    {
        std::iter::repeat_with(T::default)
            .take(self.len())
            .collect()
    }

    fn clone_array(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.to_vec()
    }
}

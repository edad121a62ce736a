/// An item together with its key, so the key-extraction function
/// runs once per item.
#[derive(Debug, Clone)]
pub(super) struct ValueKey<T, K> {
    value: T,
    key: K,
}

impl<T, K> ValueKey<T, K> {
    #[inline]
    pub(super) fn new(value: T, f: impl FnOnce(&T) -> K) -> Self {
        let key = f(&value);
        Self { value, key }
    }

    #[inline]
    pub(super) fn key(&self) -> &K {
        &self.key
    }

    #[inline]
    pub(super) fn into_value(self) -> T {
        self.value
    }
}

/// A mapping from environment variable names to string values.
///
/// Presence is decided by key existence alone: an empty string is a present
/// value.
pub trait EnvSource: Send + Sync + std::fmt::Debug {
    fn get(&self, key: &str) -> Option<String>;

    fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}

impl<S: EnvSource + ?Sized> EnvSource for Box<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
}

impl<S: EnvSource + ?Sized> EnvSource for &S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
}

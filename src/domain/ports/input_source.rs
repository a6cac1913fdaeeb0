//! Input Source Port
//!
//! Supplies raw input values by name (`remote-url`, `app-id`, ...).
//! Typing and validation happen in `config`.

pub trait InputSource {
    /// Raw value of `name`, or `None` when not supplied
    fn get(&self, name: &str) -> Option<String>;
}

impl<T: InputSource + ?Sized> InputSource for &T {
    fn get(&self, name: &str) -> Option<String> {
        (**self).get(name)
    }
}

impl InputSource for std::collections::HashMap<String, String> {
    fn get(&self, name: &str) -> Option<String> {
        std::collections::HashMap::get(self, name).cloned()
    }
}

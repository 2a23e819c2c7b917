use std::{
    collections::HashMap,
    sync::{Mutex, OnceLock, PoisonError},
};

/// Returns `type_name::<T>()` with module paths stripped, cached per type.
///
/// `core::option::Option<alloc::string::String>` becomes `Option<String>`.
pub fn short_type_name<T: ?Sized>() -> &'static str {
    static CACHE: OnceLock<Mutex<HashMap<&'static str, &'static str>>> = OnceLock::new();

    let full: &'static str = std::any::type_name::<T>();

    let cache = CACHE.get_or_init(|| Mutex::new(HashMap::new()));
    let mut guard = cache.lock().unwrap_or_else(PoisonError::into_inner);

    if let Some(&short) = guard.get(full) {
        return short;
    }

    let short: &'static str = Box::leak(strip_paths(full).into_boxed_str());
    guard.insert(full, short);
    short
}

fn strip_paths(full: &str) -> String {
    let mut out = String::with_capacity(full.len());
    let mut token = String::new();

    let flush = |token: &mut String, out: &mut String| {
        if let Some(last) = token.rsplit("::").next() {
            out.push_str(last);
        }
        token.clear();
    };

    for c in full.chars() {
        if c.is_alphanumeric() || c == '_' || c == ':' {
            token.push(c);
        } else {
            flush(&mut token, &mut out);
            out.push(c);
        }
    }
    flush(&mut token, &mut out);

    out
}

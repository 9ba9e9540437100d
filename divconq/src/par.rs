use std::thread::ScopedJoinHandle;

/// Joins a scoped worker, re-raising its panic on the calling thread.
pub(crate) fn join<T>(handle: ScopedJoinHandle<'_, T>) -> T {
    match handle.join() {
        Ok(value) => value,
        Err(payload) => std::panic::resume_unwind(payload),
    }
}

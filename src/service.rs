//! Comment store contract.
//!
//! The store owns thread and comment lifecycles. The widget reaches
//! back into it for exactly one operation: deleting a thread that was
//! collapsed while still empty.

/// External comment store consumed by the widget.
pub trait CommentService {
    /// Remove a thread from the store. Called after the widget has
    /// already released its own editor resources.
    fn dispose_thread(&mut self, owner: &str, thread_id: &str);
}

//! Session expiry notification
//!
//! Lets the service layer flip the session store to unauthenticated when
//! any call comes back Unauthorized, without every view having to check
//! for it. The provider installs the callback for its lifetime.

use std::cell::RefCell;
use std::rc::Rc;

thread_local! {
    static SESSION_EXPIRED_CALLBACK: RefCell<Option<Rc<dyn Fn()>>> = const { RefCell::new(None) };
}

/// Set the session expired callback
pub fn set_session_expired_callback(callback: Rc<dyn Fn()>) {
    SESSION_EXPIRED_CALLBACK.with(|cb| {
        *cb.borrow_mut() = Some(callback);
    });
}

/// Clear the session expired callback
pub fn clear_session_expired_callback() {
    SESSION_EXPIRED_CALLBACK.with(|cb| {
        *cb.borrow_mut() = None;
    });
}

/// Notify that the backend rejected the session
pub fn notify_session_expired() {
    SESSION_EXPIRED_CALLBACK.with(|cb| {
        if let Some(callback) = cb.borrow().as_ref() {
            callback();
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn notify_invokes_installed_callback() {
        let fired = Rc::new(Cell::new(0));
        {
            let fired = fired.clone();
            set_session_expired_callback(Rc::new(move || fired.set(fired.get() + 1)));
        }

        notify_session_expired();
        notify_session_expired();
        assert_eq!(fired.get(), 2);

        clear_session_expired_callback();
        notify_session_expired();
        assert_eq!(fired.get(), 2);
    }
}

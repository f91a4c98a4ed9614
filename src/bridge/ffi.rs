//! C ABI over [`CounterBridge`].
//!
//! The host owns the bridge pointer returned by [`countup_bridge_new`] and
//! must release it with [`countup_bridge_free`]. The callback registered with
//! [`countup_bridge_set_on_count_changed`] is a plain function pointer plus an
//! opaque `user_data` pointer; the bridge never frees or retains `user_data`,
//! the host keeps it alive for as long as the callback stays registered.
//!
//! All functions tolerate a null bridge pointer and must be called from the
//! thread that owns the bridge. The callback may call back into the bridge
//! (read, mutate, re-register or clear) but must not free it.

use std::ffi::c_void;

use super::CounterBridge;

/// Callback invoked with `user_data` and the post-mutation count.
pub type CountChangedCallback = extern "C" fn(user_data: *mut c_void, count: i32);

#[no_mangle]
pub extern "C" fn countup_bridge_new() -> *mut CounterBridge {
    Box::into_raw(Box::new(CounterBridge::new()))
}

/// # Safety
///
/// `bridge` must be null or a pointer returned by [`countup_bridge_new`]
/// that has not been freed yet. Must not be called from inside the bridge's
/// own callback.
#[no_mangle]
pub unsafe extern "C" fn countup_bridge_free(bridge: *mut CounterBridge) {
    if bridge.is_null() {
        return;
    }
    drop(Box::from_raw(bridge));
}

/// # Safety
///
/// `bridge` must be null or a live pointer from [`countup_bridge_new`].
#[no_mangle]
pub unsafe extern "C" fn countup_bridge_increment(bridge: *const CounterBridge) {
    if let Some(bridge) = bridge.as_ref() {
        bridge.increment();
    }
}

/// # Safety
///
/// `bridge` must be null or a live pointer from [`countup_bridge_new`].
#[no_mangle]
pub unsafe extern "C" fn countup_bridge_decrement(bridge: *const CounterBridge) {
    if let Some(bridge) = bridge.as_ref() {
        bridge.decrement();
    }
}

/// Returns 0 for a null bridge.
///
/// # Safety
///
/// `bridge` must be null or a live pointer from [`countup_bridge_new`].
#[no_mangle]
pub unsafe extern "C" fn countup_bridge_get_count(bridge: *const CounterBridge) -> i32 {
    bridge.as_ref().map_or(0, CounterBridge::get)
}

/// Replace the change callback. A null `callback` clears the slot.
///
/// # Safety
///
/// `bridge` must be null or a live pointer from [`countup_bridge_new`].
/// `user_data` is passed back verbatim and must stay valid while the
/// callback is registered.
#[no_mangle]
pub unsafe extern "C" fn countup_bridge_set_on_count_changed(
    bridge: *const CounterBridge,
    callback: Option<CountChangedCallback>,
    user_data: *mut c_void,
) {
    let Some(bridge) = bridge.as_ref() else {
        return;
    };

    match callback {
        Some(callback) => {
            bridge.set_on_count_changed(move |count| callback(user_data, count));
        }
        None => bridge.clear_on_count_changed(),
    }
}

//! C ABI for [`HandleList`].
//!
//! Lists are opaque `MolaList*` pointers holding `void*` values, and items are
//! opaque `MolaListItem*` pointers. Failures are reported the C way: functions
//! returning a pointer return null, and [`mola_list_remove`] returns a non-zero
//! [`ListError::code`].
//!
//! ```
//! use core::ffi::c_void;
//! use mola_list::linked_list::handle::ffi::*;
//!
//! let x = 42;
//! unsafe {
//!     let list = mola_list_create();
//!     let item = mola_list_add(list, (&x as *const i32).cast::<c_void>());
//!     assert!(!item.is_null());
//!
//!     let head = mola_list_get_head_item(list);
//!     assert_eq!(*mola_list_item_get_value(head).cast::<i32>(), 42);
//!
//!     assert_eq!(mola_list_remove(list, item), 0);
//!     assert_ne!(mola_list_remove(list, item), 0);
//!     mola_list_destroy(list);
//! }
//! ```
use core::alloc::Layout;
use core::ffi::{c_int, c_void};
use core::ptr::{self, NonNull};

use tracing::debug;

use super::{Global, HandleList, ListError, NodeAllocator};

/// The list type behind a `MolaList*`.
pub type RawList = HandleList<NonNull<c_void>>;

/// Opaque list type.
#[repr(C)]
pub struct MolaList {
    _private: [u8; 0],
}

/// Opaque item type.
#[repr(C)]
pub struct MolaListItem {
    _private: [u8; 0],
}

/// Predicate called by [`mola_list_find`] with each item and the caller's
/// context.
pub type MolaListMatchFn =
    unsafe extern "C" fn(item: *mut MolaListItem, context: *const c_void) -> bool;

unsafe fn list_ref<'a>(list: *const MolaList) -> Option<&'a RawList> {
    unsafe { list.cast::<RawList>().as_ref() }
}

unsafe fn list_mut<'a>(list: *mut MolaList) -> Option<&'a mut RawList> {
    unsafe { list.cast::<RawList>().as_mut() }
}

fn item_ptr(node: NonNull<()>) -> *mut MolaListItem {
    node.as_ptr().cast()
}

/// Creates an empty list. Returns null if the list cannot be allocated.
#[unsafe(no_mangle)]
pub extern "C" fn mola_list_create() -> *mut MolaList {
    let Some(raw) = Global.allocate(Layout::new::<RawList>()) else {
        debug!("mola_list_create -> {}", ListError::AllocationFailure);
        return ptr::null_mut();
    };
    let list = raw.cast::<RawList>();
    unsafe { list.as_ptr().write(RawList::new()) };
    list.as_ptr().cast()
}

/// Frees `list` and all of its nodes. The values are not freed. Null is
/// ignored.
///
/// # Safety
///
/// `list` must be null or a pointer returned by [`mola_list_create`] that has
/// not been destroyed yet.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn mola_list_destroy(list: *mut MolaList) {
    let Some(list) = NonNull::new(list.cast::<RawList>()) else {
        return;
    };
    unsafe {
        ptr::drop_in_place(list.as_ptr());
        Global.deallocate(list.cast(), Layout::new::<RawList>());
    }
}

/// Appends `value` to the tail of `list`.
///
/// Returns null, without allocating, if either argument is null, and null if
/// the node cannot be allocated.
///
/// # Safety
///
/// `list` must be null or a live list.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn mola_list_add(list: *mut MolaList, value: *const c_void) -> *mut MolaListItem {
    let (Some(list), Some(value)) = (unsafe { list_mut(list) }, NonNull::new(value.cast_mut())) else {
        debug!(?list, ?value, "mola_list_add -> {}", ListError::InvalidArgument);
        return ptr::null_mut();
    };
    match list.add(value) {
        Ok(item) => item_ptr(item.node_ptr()),
        Err(_) => ptr::null_mut(),
    }
}

/// Returns the first item of `list`, or null if `list` is null or empty.
///
/// # Safety
///
/// `list` must be null or a live list.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn mola_list_get_head_item(list: *const MolaList) -> *mut MolaListItem {
    unsafe { list_ref(list) }
        .and_then(RawList::head_item)
        .map_or(ptr::null_mut(), |item| item_ptr(item.node_ptr()))
}

/// Returns the item following `item`, or null if `item` is null or the last
/// item.
///
/// # Safety
///
/// `item` must be null or an item currently linked into a live list.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn mola_list_get_next_item(item: *const MolaListItem) -> *mut MolaListItem {
    NonNull::new(item.cast_mut().cast::<()>())
        .and_then(|node| unsafe { RawList::next_of_node(node) })
        .map_or(ptr::null_mut(), item_ptr)
}

/// Returns the value stored in `item`, or null if `item` is null.
///
/// # Safety
///
/// `item` must be null or an item currently linked into a live list.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn mola_list_item_get_value(item: *const MolaListItem) -> *const c_void {
    NonNull::new(item.cast_mut().cast::<()>())
        .map_or(ptr::null(), |node| unsafe { RawList::value_of_node(node) }.as_ptr().cast_const())
}

/// Returns the first item, from head to tail, for which `match_function`
/// returns true. Returns null if `list` or `match_function` is null, or if no
/// item matches.
///
/// # Safety
///
/// `list` must be null or a live list. `match_function` must not modify the
/// list.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn mola_list_find(
    list: *const MolaList,
    match_function: Option<MolaListMatchFn>,
    match_context: *const c_void,
) -> *mut MolaListItem {
    let (Some(list), Some(match_function)) = (unsafe { list_ref(list) }, match_function) else {
        debug!(?list, "mola_list_find -> {}", ListError::InvalidArgument);
        return ptr::null_mut();
    };
    list.find(|item| unsafe { match_function(item_ptr(item.handle().node_ptr()), match_context) })
        .map_or(ptr::null_mut(), |item| item_ptr(item.node_ptr()))
}

/// Unlinks and frees `item`. Returns 0 on success and a non-zero code if
/// either argument is null or `item` is not in `list`.
///
/// # Safety
///
/// `list` must be null or a live list.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn mola_list_remove(list: *mut MolaList, item: *mut MolaListItem) -> c_int {
    let (Some(list), Some(node)) = (unsafe { list_mut(list) }, NonNull::new(item.cast::<()>())) else {
        debug!(?list, ?item, "mola_list_remove -> {}", ListError::InvalidArgument);
        return ListError::InvalidArgument.code();
    };
    let removed = match list.handle_for_node(node) {
        Some(handle) => list.remove(handle),
        None => {
            debug!(?node, "mola_list_remove -> not found");
            Err(ListError::NotFound)
        }
    };
    match removed {
        Ok(_) => 0,
        Err(error) => error.code(),
    }
}

use argcap::{capture, CaptureError};

#[test]
fn set_then_read() {
    let (cap, handle) = capture();

    cap.set(42);

    assert_eq!(42, handle.value());
}

#[test]
fn read_is_idempotent() {
    let (cap, handle) = capture();

    cap.set("fuu".to_string());

    assert_eq!("fuu", handle.value());
    assert_eq!("fuu", handle.value());
    assert_eq!("fuu", handle.value());
}

#[test]
#[should_panic(expected = "no value has been captured yet")]
fn read_before_set_panics() {
    let (cap, handle) = capture::<usize>();

    let _cap = cap;
    let _ = handle.value();
}

#[test]
fn read_before_set_fails() {
    let (_cap, handle) = capture::<usize>();

    assert_eq!(Err(CaptureError::NotSet), handle.try_value());
    assert!(!handle.is_set());
}

#[test]
fn first_write_wins() {
    let (cap, handle) = capture();

    cap.set(1);

    assert_eq!(Err(CaptureError::AlreadySet), cap.try_set(2));
    assert_eq!(1, handle.value());
}

#[test]
#[should_panic(expected = "a value has already been captured")]
fn second_set_panics() {
    let (cap, _handle) = capture();

    cap.set(1);
    cap.set(2);
}

#[test]
fn cells_are_independent() {
    let (cap_a, handle_a) = capture();
    let (cap_b, handle_b) = capture::<usize>();

    cap_a.set(1);

    assert_eq!(1, handle_a.value());
    assert!(!handle_b.is_set());

    cap_b.set(2);

    assert_eq!(1, handle_a.value());
    assert_eq!(2, handle_b.value());
}

#[test]
fn into_fn_stores_like_set() {
    let (cap, handle) = capture();
    let callback = cap.into_fn();

    callback(7);

    assert_eq!(7, handle.value());
}

#[test]
#[should_panic(expected = "a value has already been captured")]
fn into_fn_rejects_second_invocation() {
    let (cap, _handle) = capture();
    let callback = cap.into_fn();

    callback(1);
    callback(2);
}

#[test]
fn with_borrows_non_clone_payload() {
    struct Payload(usize);

    let (cap, handle) = capture();

    cap.set(Payload(13));

    assert_eq!(Ok(13), handle.with(|p| p.0));
}

#[test]
fn clones_share_the_slot() {
    let (cap, handle) = capture();
    let handle2 = handle.clone();

    cap.clone().set(5);

    assert_eq!(5, handle.value());
    assert_eq!(5, handle2.value());
    assert_eq!(Err(CaptureError::AlreadySet), cap.try_set(6));
}

#[test]
fn end_to_end() {
    let (cap, handle) = capture::<i32>();

    assert_eq!(Err(CaptureError::NotSet), handle.try_value());

    cap.set(42);

    assert_eq!(42, handle.value());
    assert_eq!(Err(CaptureError::AlreadySet), cap.try_set(7));
    assert_eq!(42, handle.value());
}

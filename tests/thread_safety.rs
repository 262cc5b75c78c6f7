mod common;

use cors_negotiator::constants::{header, method};
use common::asserts::{assert_preflight, assert_simple};
use common::builders::{negotiator, preflight_request, simple_request};
use common::headers::header_value;
use std::sync::{Arc, Barrier};
use std::thread;

#[test]
fn negotiator_can_be_shared_across_threads() {
    let negotiator = Arc::new(
        negotiator()
            .credentials(true)
            .allowed_headers(["X-Thread"])
            .build(),
    );
    let barrier = Arc::new(Barrier::new(8));

    let mut handles = Vec::new();
    for i in 0..8 {
        let negotiator = Arc::clone(&negotiator);
        let barrier = Arc::clone(&barrier);
        handles.push(thread::spawn(move || {
            let origin = format!("https://thread{}.example", i);
            // every thread hits the lazily rendered templates at once
            barrier.wait();
            let (headers, status) = assert_preflight(
                preflight_request()
                    .origin(origin.as_str())
                    .request_method(method::POST)
                    .request_headers("x-thread")
                    .check(&negotiator),
            );

            assert_eq!(status, 200);
            assert_eq!(
                header_value(&headers, header::ACCESS_CONTROL_ALLOW_ORIGIN),
                Some(origin.clone()),
            );
            assert_eq!(
                header_value(&headers, header::ACCESS_CONTROL_ALLOW_HEADERS).as_deref(),
                Some("X-Thread"),
            );
            assert_eq!(
                header_value(&headers, header::ACCESS_CONTROL_ALLOW_METHODS).as_deref(),
                Some("GET, HEAD, PUT, PATCH, POST, DELETE"),
            );

            let simple_headers =
                assert_simple(simple_request().origin(origin.as_str()).check(&negotiator));
            assert_eq!(
                header_value(&simple_headers, header::ACCESS_CONTROL_ALLOW_ORIGIN),
                Some(origin),
            );
        }));
    }

    for handle in handles {
        handle.join().expect("thread panic");
    }
}

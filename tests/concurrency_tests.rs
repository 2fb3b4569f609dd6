use pathcomb::parser::{literal, optional, sequence, LazyParser};
use pathcomb::route::compile;
use pathcomb::router::Router;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

#[test]
fn test_compiled_parser_shared_across_threads() {
    let parser = compile("/users/:id/posts/:post_id");

    let handles: Vec<_> = (0..8)
        .map(|n| {
            let parser = parser.clone();
            thread::spawn(move || {
                for i in 0..200 {
                    let path = format!("/users/{n}/posts/{i}");
                    let outcome = parser.parse(&path, 0);
                    assert!(outcome.matched);
                    assert_eq!(outcome.attribute("id"), Some(n.to_string().as_str()));
                    assert_eq!(outcome.attribute("post_id"), Some(i.to_string().as_str()));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn test_recursive_grammar_shared_across_threads() {
    let cell = LazyParser::new();
    let repeated = optional(sequence([literal("ab"), cell.parser()]));
    cell.define(repeated.clone()).unwrap();

    let handles: Vec<_> = (1..=4)
        .map(|n| {
            let repeated = repeated.clone();
            thread::spawn(move || {
                let input = "ab".repeat(n * 10);
                assert_eq!(repeated.parse(&input, 0).next_position, input.len());
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn test_registration_races_with_dispatch() {
    let router = Arc::new(Router::new());
    let hits = Arc::new(AtomicUsize::new(0));

    let counter = Arc::clone(&hits);
    router
        .register("/base/:id", move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        })
        .unwrap();

    let writer = {
        let router = Arc::clone(&router);
        thread::spawn(move || {
            for i in 0..50 {
                router.register(&format!("/extra{i}/:id"), |_| {}).unwrap();
            }
        })
    };

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let router = Arc::clone(&router);
            thread::spawn(move || {
                for i in 0..100 {
                    assert!(router.dispatch(&format!("/base/{i}")));
                }
            })
        })
        .collect();

    writer.join().unwrap();
    for reader in readers {
        reader.join().unwrap();
    }

    assert_eq!(hits.load(Ordering::SeqCst), 400);
    assert_eq!(router.len(), 51);
    assert_eq!(router.templates()[0], "/base/:id");
    assert!(router.lookup("/extra49/7").is_some());
}

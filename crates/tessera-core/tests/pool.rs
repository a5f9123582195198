use std::thread;

use tessera_core::config::PoolConfig;
use tessera_core::pool::Pool;

#[test]
fn returned_buffer_is_cleared_before_reuse() {
    let pool: Pool<String> = Pool::default();

    {
        let mut buffer = pool.get();
        buffer.push_str("secret from a previous call");
    }

    assert_eq!(pool.idle(), 1);
    let buffer = pool.get();
    assert!(buffer.is_empty());
    assert!(buffer.capacity() >= "secret from a previous call".len());
}

#[test]
fn buffer_is_returned_when_unwinding() {
    let pool: Pool<Vec<u8>> = Pool::default();

    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        let mut buffer = pool.get();
        buffer.extend_from_slice(b"partial");
        panic!("interrupted");
    }));

    assert!(result.is_err());
    assert_eq!(pool.idle(), 1);
    assert!(pool.get().is_empty());
}

#[test]
fn oversized_buffers_are_dropped() {
    let pool: Pool<String> = Pool::new(PoolConfig {
        max_retained: 4,
        max_capacity: 16,
    });

    {
        let mut buffer = pool.get();
        buffer.push_str(&"x".repeat(1024));
    }

    assert_eq!(pool.idle(), 0);
}

#[test]
fn retains_at_most_max_retained() {
    let pool: Pool<String> = Pool::new(PoolConfig {
        max_retained: 2,
        max_capacity: 1024,
    });

    {
        let _a = pool.get();
        let _b = pool.get();
        let _c = pool.get();
    }

    assert_eq!(pool.idle(), 2);
}

#[test]
fn concurrent_get_and_return() {
    let pool: Pool<String> = Pool::default();

    thread::scope(|s| {
        for worker in 0..8 {
            let pool = &pool;
            s.spawn(move || {
                for i in 0..200 {
                    let mut buffer = pool.get();
                    assert!(buffer.is_empty());
                    buffer.push_str(&format!("worker {worker} item {i}"));
                }
            });
        }
    });

    assert!(pool.idle() <= 8);
    assert!(pool.get().is_empty());
}

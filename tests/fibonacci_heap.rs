use fib_sssp::FibonacciHeap;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

// Populating the heap with a set of (vertex, key) pairs and draining it must
// yield exactly that set back, keys in non-decreasing order.
#[test]
fn extraction_is_complete_and_sorted() {
    let mut rng = StdRng::seed_from_u64(21);
    for _ in 0..10 {
        let count = rng.gen_range(1..200);
        let mut pairs: Vec<(usize, u64)> = (0..count)
            .map(|vertex| (vertex, rng.gen_range(0..1_000u64)))
            .collect();
        pairs.shuffle(&mut rng);

        let mut heap = FibonacciHeap::new();
        for &(vertex, key) in &pairs {
            heap.insert(vertex, key);
        }
        assert_eq!(heap.len(), count);

        let mut drained = Vec::new();
        while let Some(entry) = heap.extract_min() {
            drained.push(entry);
        }
        assert!(heap.is_empty());
        assert_eq!(drained.len(), count);
        assert!(drained.windows(2).all(|w| w[0].1 <= w[1].1));

        let mut expected: Vec<(usize, u64)> = pairs.clone();
        expected.sort_unstable();
        let mut got = drained.clone();
        got.sort_unstable();
        assert_eq!(got, expected);
    }
}

#[test]
fn keys_are_non_increasing_under_decrease_key() {
    let mut heap = FibonacciHeap::new();
    let id = heap.insert(0, 100u64);
    heap.insert(1, 40);

    // Only strict decreases take effect.
    for attempt in [120u64, 100, 90, 95, 60, 60, 50] {
        heap.decrease_key(id, attempt);
    }
    assert_eq!(heap.extract_min(), Some((1, 40)));
    assert_eq!(heap.extract_min(), Some((0, 50)));
}

#[test]
fn handles_survive_heavy_mixing() {
    let mut rng = StdRng::seed_from_u64(99);
    let mut heap = FibonacciHeap::new();
    let mut keys: Vec<u64> = Vec::new();

    for vertex in 0..500usize {
        let key = rng.gen_range(1_000..100_000u64);
        heap.insert(vertex, key);
        keys.push(key);
    }

    // Force consolidation, then hammer decrease-key through stored handles.
    let first = heap.extract_min().unwrap();
    let mut extracted = vec![first.0];
    for _ in 0..2_000 {
        let vertex = rng.gen_range(0..keys.len());
        if extracted.contains(&vertex) {
            continue;
        }
        let new_key = rng.gen_range(0..keys[vertex].max(1));
        let id = heap.handle(vertex).unwrap();
        heap.decrease_key(id, new_key);
        if new_key < keys[vertex] {
            keys[vertex] = new_key;
        }
    }

    let mut last = first.1.min(*keys.iter().min().unwrap());
    while let Some((vertex, key)) = heap.extract_min() {
        assert_eq!(key, keys[vertex]);
        assert!(key >= last, "extraction went backwards");
        last = key;
        extracted.push(vertex);
    }
    assert_eq!(extracted.len(), 500);
}

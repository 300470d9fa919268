use super::*;
use std::collections::HashMap;

#[test]
fn can_use_map_reduce_for_vec() {
    let vec = vec![1, 2, 3];

    let result = map_reduce(&vec, |item| *item, || 0, |a, b| a + b);

    assert_eq!(result, 6);
}

#[test]
fn can_use_map_reduce_for_map() {
    let mut map = HashMap::new();
    map.insert(1, "1");
    map.insert(2, "2");

    let result = map_reduce(&map, |(key, _)| *key, || 0, |a, b| a + b);

    assert_eq!(result, 3);
}

#[test]
fn can_use_parallel_collect() {
    let vec = vec![1, 2, 3, 4];

    let result = parallel_collect(&vec, |item| item * 2);

    assert_eq!(result, vec![2, 4, 6, 8]);
}

#[test]
fn can_execute_on_thread_pool() {
    let pool = ThreadPool::new(2);

    let result = pool.execute(|| (0..10).sum::<i32>());

    assert_eq!(result, 45);
}

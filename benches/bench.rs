use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use treelib::linked::Tree;

/// Keys for a tree with `num_levels` full levels, ordered midpoint-first so
/// that plain insertion produces a balanced shape. Without this the
/// unbalancing tree degrades to a list and the larger sizes measure nothing
/// but pointer chasing down a chain.
fn level_order_keys(num_levels: u32) -> Vec<i32> {
    let mut keys = Vec::new();
    let mut ranges = vec![(0i32, 2i32.pow(num_levels) - 2)];
    while let Some((lo, hi)) = ranges.pop() {
        if lo > hi {
            continue;
        }
        let mid = lo + (hi - lo) / 2;
        keys.push(mid);
        ranges.push((lo, mid - 1));
        ranges.push((mid + 1, hi));
    }
    keys
}

/// Helper to bench a function on a BST.
/// It creates a group for the given name and closure and runs tests for
/// various sizes of tree before finishing the group.
fn bench_helper(c: &mut Criterion, name: &str, f: impl Fn(&mut Tree<i32>, i32)) {
    let mut group = c.benchmark_group(name);

    for num_levels in [3, 7, 11, 15].iter() {
        let largest_element_in_tree = 2i32.pow(*num_levels) - 2;

        let tree = {
            let mut tree = Tree::new();
            for key in level_order_keys(*num_levels) {
                tree.add(key);
            }
            tree
        };

        let id = BenchmarkId::from_parameter(largest_element_in_tree);
        group.bench_function(id, |b| {
            b.iter_custom(|iters| {
                let mut time = std::time::Duration::ZERO;
                for _ in 0..iters {
                    let mut tree = black_box(tree.clone());
                    let instant = std::time::Instant::now();
                    f(&mut tree, black_box(largest_element_in_tree));
                    let elapsed = instant.elapsed();
                    time += elapsed;
                }
                time
            })
        });
    }

    group.finish();
}

pub fn criterion_benchmark(c: &mut Criterion) {
    bench_helper(c, "find", |tree, i| {
        let _node = black_box(tree.find(&i));
    });
    bench_helper(c, "remove", |tree, i| {
        tree.remove(&i);
    });

    bench_helper(c, "add", |tree, i| {
        tree.add(i + 1);
    });

    bench_helper(c, "find-miss", |tree, i| {
        let _node = black_box(tree.find(&(i + 1)));
    });
    bench_helper(c, "remove-miss", |tree, i| {
        tree.remove(&(i + 1));
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

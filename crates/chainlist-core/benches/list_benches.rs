// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use chainlist_core::prelude::DoublyLinkedList;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

// -----------------------
// Problem size constants
// -----------------------
const NUM_NODES: usize = 1_000;
const NEEDLE_EVERY: usize = 50;

// Build: 0,1,2,... with a repeating needle value spliced in every
// NEEDLE_EVERY slots so the scan benches have hits across the whole chain.
fn build_list() -> DoublyLinkedList<u64> {
    let mut list = DoublyLinkedList::new();
    for i in 0..NUM_NODES {
        if i % NEEDLE_EVERY == 0 {
            list.push_back(u64::MAX);
        } else {
            list.push_back(i as u64);
        }
    }
    list
}

fn bench_push_pop_churn(c: &mut Criterion) {
    c.bench_function("dll/push_back_pop_front_churn", |b| {
        let mut list = build_list();
        b.iter(|| {
            let value = list.pop_front().unwrap();
            list.push_back(black_box(value));
            black_box(list.len())
        })
    });
}

fn bench_unlink_midlist(c: &mut Criterion) {
    c.bench_function("dll/remove_node_then_reinsert_mid", |b| {
        let mut list = build_list();
        b.iter(|| {
            // Unlink a stable interior node and splice it back, so every
            // iteration exercises the O(1) rewire path on a warm chain.
            let mid = list.find(&black_box(u64::MAX)).unwrap();
            let value = list.remove_node(mid);
            let anchor = list.head_index().unwrap();
            black_box(list.insert_after(anchor, value))
        })
    });
}

fn bench_reverse(c: &mut Criterion) {
    c.bench_function("dll/reverse_1k", |b| {
        let mut list = build_list();
        b.iter(|| {
            list.reverse();
            black_box(list.front().copied())
        })
    });
}

fn bench_find_all(c: &mut Criterion) {
    let list = build_list();
    c.bench_function("dll/find_all_needles_1k", |b| {
        b.iter(|| black_box(list.find_all(black_box(&u64::MAX))).len())
    });
}

criterion_group!(
    benches,
    bench_push_pop_churn,
    bench_unlink_midlist,
    bench_reverse,
    bench_find_all
);
criterion_main!(benches);

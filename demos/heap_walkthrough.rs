//! Walkthrough of the min-heap, queue and linked list
//!
//! ## Running
//!
//! ```bash
//! cargo run --example heap_walkthrough
//!
//! # Show array growth and sort passes
//! RUST_LOG=trace cargo run --example heap_walkthrough
//! ```

use rust_basic_collections::linked_list::LinkedList;
use rust_basic_collections::min_heap::MinHeap;
use rust_basic_collections::queue::Queue;
use rust_basic_collections::{CollectionError, Sequence};

fn main() -> Result<(), CollectionError> {
    env_logger::init();

    let mut heap = MinHeap::new();

    println!("Adding elements to the heap...");
    for value in [10, 20, 5, 15, 30] {
        heap.insert(value);
    }

    println!("Minimum element: {}", heap.peek_min()?);
    println!("Heap size: {}", heap.len());

    println!("Extracting all elements:");
    while !heap.is_empty() {
        println!("Extracted: {}", heap.extract_min()?);
    }
    println!("Is heap empty? {}", heap.is_empty());

    let mut queue: Queue<i32> = (1..=3).collect();
    display_queue(&queue);
    queue.dequeue()?;
    display_queue(&queue);
    queue.clear();
    display_queue(&queue);

    let mut list: LinkedList<i32> = [42, 7, 19].into_iter().collect();
    list.sort();
    display_list(&list);
    list.clear();
    display_list(&list);

    Ok(())
}

fn display_queue(queue: &Queue<i32>) {
    if queue.is_empty() {
        println!("Queue is empty");
    } else {
        println!("Queue contents: {}", queue);
    }
}

fn display_list(list: &LinkedList<i32>) {
    if list.is_empty() {
        println!("List is empty");
    } else {
        println!("List contents: {}", list);
    }
}

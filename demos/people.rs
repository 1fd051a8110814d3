//! Drains two small queues to show FIFO tie-breaking.
//!
//! ```bash
//! RUST_LOG=stable_heap=debug cargo run --example people
//! ```

use stable_heap::compare::by_key;
use stable_heap::StableHeap;
use tracing_subscriber::EnvFilter;

struct Person {
    name: &'static str,
    age: u32,
}

struct Combatant {
    name: &'static str,
    energy: u32,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Same names come out in the order they were added
    let mut people = StableHeap::with_comparator(by_key(|p: &Person| p.name));
    people.push(Person { name: "Jack", age: 31 });
    people.push(Person { name: "Anna", age: 111 });
    people.push(Person { name: "Jack", age: 46 });
    people.push(Person { name: "Jack", age: 11 });
    people.push(Person { name: "Abba", age: 31 });
    people.push(Person { name: "Abba", age: 30 });
    while let Some(person) = people.pop() {
        println!("{} ({})", person.name, person.age);
    }

    let mut arena = StableHeap::with_comparator(by_key(|c: &Combatant| c.energy));
    for name in ["player", "monster1", "monster2", "monster3"] {
        arena.push(Combatant { name, energy: 10 });
    }
    arena.renumber();
    for combatant in arena.drain_sorted() {
        println!("{} ({})", combatant.name, combatant.energy);
    }

    // Releases the storage left behind by the drain
    arena.trim();
}

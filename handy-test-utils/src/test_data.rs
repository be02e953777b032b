// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::person::Person;

pub fn person_alice() -> Person {
    Person::new("Alice", 25, "Hanoi")
}

pub fn person_bob() -> Person {
    Person::new("Bob", 30, "Da Nang")
}

pub fn person_charlie() -> Person {
    Person::new("Charlie", 35, "Hanoi")
}

pub fn person_diane() -> Person {
    Person::new("Diane", 40, "Hue")
}

/// Alice, Bob, Charlie, Diane, in that order.
pub fn people() -> Vec<Person> {
    vec![person_alice(), person_bob(), person_charlie(), person_diane()]
}

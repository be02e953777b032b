// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub age: u32,
    pub city: String,
}

impl Person {
    #[must_use]
    pub fn new(name: impl Into<String>, age: u32, city: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age,
            city: city.into(),
        }
    }
}

impl Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Person[name={}, age={}, city={}]",
            self.name, self.age, self.city
        )
    }
}

use std::fmt::{Display, Formatter};

use serde::Serialize;

/// A value and how many times it occurred.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CountRecord<T> {
    pub value: T,
    pub count: u32,
}

impl<T: Display> Display for CountRecord<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "The Number {} Comes {} times", self.value, self.count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let record = CountRecord { value: 10, count: 2 };
        assert_eq!(record.to_string(), "The Number 10 Comes 2 times");
    }
}

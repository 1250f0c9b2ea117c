use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{fmt, num::ParseIntError, str::FromStr};

/// Identifier of a task (monotonic integer).
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct TaskId(pub u64);

impl TaskId {
    /// Identifier handed out by an empty list.
    pub const FIRST: Self = Self(1);

    /// Identifier following this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for TaskId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

// The snapshot layout stores ids as bare JSON numbers.
impl Serialize for TaskId {
    fn serialize<S>(&self, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.serialize_u64(self.0)
    }
}

impl<'de> Deserialize<'de> for TaskId {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        u64::deserialize(d).map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_id_is_one() {
        assert_eq!(TaskId::FIRST, TaskId(1));
    }

    #[test]
    fn next_increments() {
        assert_eq!(TaskId(41).next(), TaskId(42));
    }

    #[test]
    fn task_id_roundtrip() {
        let parsed: TaskId = TaskId(7).to_string().parse().expect("must parse task id");
        assert_eq!(parsed, TaskId(7));
    }

    #[test]
    fn serializes_as_bare_number() {
        let json = serde_json::to_string(&TaskId(12)).expect("must serialize task id");
        assert_eq!(json, "12");

        let back: TaskId = serde_json::from_str("12").expect("must deserialize task id");
        assert_eq!(back, TaskId(12));
    }
}

// This file is part of growable-stack.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `serde` support for [`Stack`](crate::Stack).
//!
//! - **Serialize**: as a sequence of the live elements, bottom first.
//! - **Deserialize**: from any sequence; each element is pushed in order, so
//!   the last one ends up on top.
//!
//! Capacity is not part of the serialized form. A deserialized stack starts at
//! [`Stack::DEFAULT_CAPACITY`](crate::Stack::DEFAULT_CAPACITY) and grows as
//! usual.

// Crate imports
use crate::stack::Stack;

// Core imports
use core::{fmt, marker::PhantomData};

// External imports - serde
use serde::{Deserialize, Deserializer, Serialize, Serializer, de, ser};

impl<T: Serialize> Serialize for Stack<T> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        use ser::SerializeSeq;
        let mut seq = s.serialize_seq(Some(self.len()))?;
        for item in self.iter() {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}

struct StackVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> de::Visitor<'de> for StackVisitor<T> {
    type Value = Stack<T>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a sequence of stack elements, bottom first")
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut a: A) -> Result<Self::Value, A::Error> {
        let mut out = Stack::new();
        while let Some(elem) = a.next_element::<T>()? {
            out.push(elem);
        }
        Ok(out)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Stack<T> {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_seq(StackVisitor(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use super::Stack;
    use alloc::string::{String, ToString};

    #[test]
    fn test_serde_roundtrip_json() {
        let v: Stack<i32> = [1, 2, 3].into_iter().collect();
        let s = serde_json::to_string(&v).unwrap();
        assert_eq!(s, "[1,2,3]");
        let mut back: Stack<i32> = serde_json::from_str(&s).unwrap();
        assert_eq!(back, v);
        assert_eq!(back.pop(), Ok(3));
    }

    #[test]
    fn test_serialize_omits_popped_elements() {
        let mut v: Stack<String> = ["a", "b", "c"].iter().map(|s| s.to_string()).collect();
        v.pop().unwrap();
        assert_eq!(serde_json::to_string(&v).unwrap(), r#"["a","b"]"#);
    }

    #[test]
    fn test_serde_roundtrip_empty_json() {
        let v: Stack<i32> = Stack::with_capacity(0);
        let s = serde_json::to_string(&v).unwrap();
        assert_eq!(s, "[]");
        let back: Stack<i32> = serde_json::from_str(&s).unwrap();
        assert!(back.is_empty());
        assert_eq!(back.capacity(), Stack::<i32>::DEFAULT_CAPACITY);
    }

    #[test]
    fn test_deserialize_grows_past_default_capacity() {
        let json = serde_json::to_string(&(0..40).collect::<alloc::vec::Vec<u32>>()).unwrap();
        let back: Stack<u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(back.size(), 40);
        assert_eq!(back.peek(), Some(&39));
    }

    #[test]
    fn test_visitor_expecting_message() {
        let err = serde_json::from_str::<Stack<i32>>(r#"{"not":"an array"}"#).unwrap_err();
        let msg = err.to_string();
        assert!(
            msg.contains("a sequence of stack elements"),
            "unexpected error message: {msg}"
        );
    }
}

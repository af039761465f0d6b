use core::fmt;
use core::marker::PhantomData;

use serde::de::{Deserializer, SeqAccess, Visitor};
use serde::ser::{SerializeSeq, Serializer};

use crate::{FieldWord, Ssv};

/// One stored string, serialized as bytes rather than as a sequence of
/// integers when the format can tell the difference.
struct Bytes<'a>(&'a [u8]);

impl serde::Serialize for Bytes<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bytes(self.0)
    }
}

fn string_vec<'de, const B: usize, W, D>(deserializer: D) -> Result<Ssv<B, W>, D::Error>
where
    W: FieldWord,
    D: Deserializer<'de>,
{
    struct SsvVisitor<const B: usize, W>(PhantomData<W>);

    impl<'de, const B: usize, W: FieldWord> Visitor<'de> for SsvVisitor<B, W> {
        type Value = Ssv<B, W>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a sequence of byte strings")
        }

        fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
            let mut vec = Ssv::new();
            while let Some(element) = seq.next_element::<Element>()? {
                vec.push_back(element.0);
            }
            Ok(vec)
        }
    }

    deserializer.deserialize_seq(SsvVisitor(PhantomData))
}

/// An owned element, accepted as bytes, a string, or a sequence of integers
/// (what self-describing formats without a bytes type produce).
struct Element(Vec<u8>);

impl<'de> serde::Deserialize<'de> for Element {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ElementVisitor;

        impl<'de> Visitor<'de> for ElementVisitor {
            type Value = Element;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a byte string")
            }

            fn visit_bytes<E: serde::de::Error>(self, v: &[u8]) -> Result<Self::Value, E> {
                Ok(Element(v.to_vec()))
            }

            fn visit_byte_buf<E: serde::de::Error>(self, v: Vec<u8>) -> Result<Self::Value, E> {
                Ok(Element(v))
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Self::Value, E> {
                Ok(Element(v.as_bytes().to_vec()))
            }

            fn visit_string<E: serde::de::Error>(self, v: String) -> Result<Self::Value, E> {
                Ok(Element(v.into_bytes()))
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
                let mut bytes = Vec::with_capacity(seq.size_hint().unwrap_or(0));
                while let Some(byte) = seq.next_element::<u8>()? {
                    bytes.push(byte);
                }
                Ok(Element(bytes))
            }
        }

        deserializer.deserialize_byte_buf(ElementVisitor)
    }
}

impl<const B: usize, W: FieldWord> serde::Serialize for Ssv<B, W> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for string in self {
            seq.serialize_element(&Bytes(string))?;
        }
        seq.end()
    }
}

impl<'de, const B: usize, W: FieldWord> serde::Deserialize<'de> for Ssv<B, W> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        string_vec(deserializer)
    }
}

#[cfg(test)]
mod tests {
    use crate::Ssv;

    #[test]
    fn test_json_roundtrip() {
        let vec: Ssv = crate::ssv!["hello", "world", ""];

        let json = serde_json::to_string(&vec).unwrap();
        let back: Ssv = serde_json::from_str(&json).unwrap();

        assert_eq!(vec, back);
    }

    #[test]
    fn test_spilled_roundtrip() {
        let mut vec: Ssv = Ssv::new();
        for i in 0..50 {
            vec.push_back(i.to_string());
        }
        assert!(vec.is_heap_allocated());

        let json = serde_json::to_string(&vec).unwrap();
        let back: Ssv = serde_json::from_str(&json).unwrap();

        assert_eq!(vec, back);
        assert_eq!(back.len(), 50);
    }
}

//! JSON document codec for the ledger.
//!
//! The document is a single JSON object: item name -> integer quantity. Key
//! order is preserved in both directions (`serde_json`'s `preserve_order`).

use std::io::{Read, Write};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value as JsonValue};

use stockledger_inventory::StockLedger;
use stockledger_inventory::boundary::type_name;

/// Indentation used when writing the document.
pub const INDENT: &[u8] = b"    ";

/// Why a document could not be decoded.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// Reading the underlying source failed mid-parse.
    #[error("could not read document: {0}")]
    Io(#[from] std::io::Error),
    /// The bytes are not a JSON object of integer quantities.
    #[error("{0}")]
    Invalid(String),
}

/// Decode a ledger document. Keys are trusted as given.
pub fn decode<R: Read>(reader: R) -> Result<StockLedger, DecodeError> {
    let object: Map<String, JsonValue> = serde_json::from_reader(reader).map_err(|e| {
        if e.is_io() {
            DecodeError::Io(e.into())
        } else {
            DecodeError::Invalid(e.to_string())
        }
    })?;

    let mut entries = Vec::with_capacity(object.len());
    for (item, value) in object {
        let Some(qty) = value.as_i64() else {
            return Err(DecodeError::Invalid(format!(
                "quantity for {item:?} is not an integer (got {})",
                type_name(&value)
            )));
        };
        entries.push((item, qty));
    }

    Ok(StockLedger::from_entries(entries))
}

/// Encode a ledger document with four-space indentation.
pub fn encode<W: Write>(ledger: &StockLedger, writer: W) -> serde_json::Result<()> {
    let mut ser = serde_json::Serializer::with_formatter(writer, PrettyFormatter::with_indent(INDENT));
    ledger.serialize(&mut ser)
}

/// [`encode`] into a `String`.
pub fn encode_to_string(ledger: &StockLedger) -> serde_json::Result<String> {
    let mut buf = Vec::new();
    encode(ledger, &mut buf)?;
    String::from_utf8(buf).map_err(|e| serde::ser::Error::custom(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_with_four_space_indent_in_insertion_order() {
        let stock = StockLedger::from_entries([("banana", 13), ("apple", 7)]);
        let text = encode_to_string(&stock).unwrap();
        assert_eq!(text, "{\n    \"banana\": 13,\n    \"apple\": 7\n}");
    }

    #[test]
    fn empty_ledger_encodes_as_empty_object() {
        assert_eq!(encode_to_string(&StockLedger::new()).unwrap(), "{}");
    }

    #[test]
    fn decode_preserves_document_order() {
        let stock = decode(r#"{"pear": -2, "apple": 7, "banana": 13}"#.as_bytes()).unwrap();
        let items: Vec<_> = stock.entries().collect();
        assert_eq!(items, vec![("pear", -2), ("apple", 7), ("banana", 13)]);
    }

    #[test]
    fn decode_rejects_malformed_json() {
        let err = decode("{\"apple\": 7,".as_bytes()).unwrap_err();
        assert!(matches!(err, DecodeError::Invalid(_)));
    }

    #[test]
    fn decode_rejects_non_object_documents() {
        for text in ["[1, 2]", "7", "\"apple\"", "null"] {
            assert!(matches!(decode(text.as_bytes()), Err(DecodeError::Invalid(_))));
        }
    }

    #[test]
    fn decode_rejects_non_integer_quantities() {
        let err = decode(r#"{"apple": "7"}"#.as_bytes()).unwrap_err();
        match err {
            DecodeError::Invalid(msg) => {
                assert!(msg.contains("\"apple\""));
                assert!(msg.contains("string"));
            }
            other => panic!("expected invalid document, got {other:?}"),
        }
        assert!(decode(r#"{"apple": 7.5}"#.as_bytes()).is_err());
    }

    #[test]
    fn decode_errors_display_their_reason() {
        let err = decode(r#"{"apple": true}"#.as_bytes()).unwrap_err();
        assert_eq!(
            err.to_string(),
            r#"quantity for "apple" is not an integer (got boolean)"#
        );

        let io = DecodeError::from(std::io::Error::other("disk gone"));
        assert_eq!(io.to_string(), "could not read document: disk gone");
    }

    #[test]
    fn decode_trusts_keys_as_given() {
        let stock = decode(r#"{"": 3, "bolt": 0}"#.as_bytes()).unwrap();
        assert_eq!(stock.get_quantity(""), 3);
        assert!(stock.contains("bolt"));
    }
}

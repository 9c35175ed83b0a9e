//! Hex and address codecs for the bundle wire format.
//!
//! Wire conventions: integers and byte strings are `0x`-prefixed lowercase
//! hex, addresses are EIP-55 checksum-cased. The [`serde`](self) helper
//! modules below apply these conventions to individual struct fields via
//! `#[serde(with = "...")]`.

use alloy_primitives::{hex, keccak256, Address, U256};

use crate::error::CodecError;

/// Decodes a `0x`-prefixed hex integer, up to 2^256 - 1.
pub fn decode_hex_int(s: &str) -> Result<U256, CodecError> {
    let digits = s
        .strip_prefix("0x")
        .ok_or_else(|| CodecError::Decode(format!("missing `0x` prefix in `{s}`")))?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(CodecError::Decode(format!("invalid hex integer `{s}`")))
    }
    U256::from_str_radix(digits, 16)
        .map_err(|err| CodecError::Decode(format!("invalid hex integer `{s}`: {err}")))
}

/// Encodes an integer as canonical lowercase hex: no leading zeros, and zero
/// itself encodes as `0x0`.
pub fn encode_hex_int(n: U256) -> String {
    format!("{n:#x}")
}

/// Decodes a `0x`-prefixed hex byte string, checking the decoded length
/// against `expected_len` if one is given.
pub fn decode_hex_bytes(s: &str, expected_len: Option<usize>) -> Result<Vec<u8>, CodecError> {
    let digits = s
        .strip_prefix("0x")
        .ok_or_else(|| CodecError::Decode(format!("missing `0x` prefix in `{s}`")))?;
    let bytes = hex::decode(digits)
        .map_err(|err| CodecError::Decode(format!("invalid hex bytes `{s}`: {err}")))?;
    if let Some(expected) = expected_len {
        if bytes.len() != expected {
            return Err(CodecError::Length { expected, got: bytes.len() })
        }
    }
    Ok(bytes)
}

/// Encodes bytes as lowercase hex, zero-padded to the input length.
pub fn encode_hex_bytes(b: &[u8]) -> String {
    format!("0x{}", hex::encode(b))
}

/// Decodes a 20-byte account address. Input casing is not significant; the
/// checksum casing is applied on output by [`encode_address`].
pub fn decode_address(s: &str) -> Result<Address, CodecError> {
    let bytes = decode_hex_bytes(s, Some(20))?;
    Ok(Address::from_slice(&bytes))
}

/// Encodes an address with EIP-55 checksum casing: hex digit `i` is
/// capitalized iff nibble `i` of `keccak256(lowercase_hex)` is >= 8.
pub fn encode_address(address: &Address) -> String {
    let lower = hex::encode(address.as_slice());
    let digest = keccak256(lower.as_bytes());
    let mut out = String::with_capacity(42);
    out.push_str("0x");
    for (i, c) in lower.chars().enumerate() {
        let nibble = (digest[i / 2] >> (4 * (1 - i % 2))) & 0xf;
        if c.is_ascii_alphabetic() && nibble >= 8 {
            out.push(c.to_ascii_uppercase());
        } else {
            out.push(c);
        }
    }
    out
}

fn u64_from_value(val: serde_json::Value) -> Result<u64, CodecError> {
    match val {
        serde_json::Value::String(s) => {
            let n = decode_hex_int(&s)?;
            u64::try_from(n).map_err(|_| CodecError::Decode(format!("`{s}` overflows u64")))
        }
        // bare integers are the legacy wire form
        serde_json::Value::Number(num) => {
            if let Some(n) = num.as_u64() {
                return Ok(n)
            }
            match num.as_i64() {
                Some(n) => {
                    Err(CodecError::Range { value: n as i128, min: 0, max: u64::MAX as i128 })
                }
                None => Err(CodecError::Decode(format!("`{num}` is not an integer"))),
            }
        }
        other => Err(CodecError::Decode(format!("expected hex string or integer, got {other}"))),
    }
}

/// Hex-encoded `u64`, e.g. block numbers. Decoding also accepts bare JSON
/// integers (the legacy wire form); encoding always produces canonical hex.
pub mod hex_u64 {
    use super::*;
    use serde::{de, Deserialize, Deserializer, Serializer};

    /// Deserializes from a `0x` hex string or a bare non-negative integer.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<u64, D::Error>
    where
        D: Deserializer<'de>,
    {
        let val = serde_json::Value::deserialize(deserializer)?;
        u64_from_value(val).map_err(de::Error::custom)
    }

    /// Serializes as a canonical lowercase hex string.
    pub fn serialize<S>(value: &u64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&encode_hex_int(U256::from(*value)))
    }
}

/// [`hex_u64`] for optional fields; JSON `null` decodes to `None`.
pub mod hex_u64_opt {
    use super::*;
    use serde::{de, Deserialize, Deserializer, Serializer};

    /// Deserializes from a `0x` hex string, a bare integer, or `null`.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match serde_json::Value::deserialize(deserializer)? {
            serde_json::Value::Null => Ok(None),
            other => u64_from_value(other).map(Some).map_err(de::Error::custom),
        }
    }

    /// Serializes as a canonical lowercase hex string when present.
    pub fn serialize<S>(value: &Option<u64>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(value) => hex_u64::serialize(value, serializer),
            None => serializer.serialize_none(),
        }
    }
}

/// Variable-length hex byte strings, e.g. signed transactions.
pub mod hex_bytes {
    use super::*;
    use alloy_primitives::Bytes;
    use serde::{de, Deserialize, Deserializer, Serializer};

    /// Deserializes from a `0x` hex string of any length.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Bytes, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        decode_hex_bytes(&s, None).map(Bytes::from).map_err(de::Error::custom)
    }

    /// Serializes as a lowercase hex string.
    pub fn serialize<S>(value: &Bytes, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&encode_hex_bytes(value))
    }
}

/// 32-byte hex values, e.g. transaction hashes.
pub mod hex_b256 {
    use super::*;
    use alloy_primitives::B256;
    use serde::{de, Deserialize, Deserializer, Serializer};

    /// Deserializes from a `0x` hex string of exactly 64 digits.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<B256, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let bytes = decode_hex_bytes(&s, Some(32)).map_err(de::Error::custom)?;
        Ok(B256::from_slice(&bytes))
    }

    /// Serializes as a lowercase hex string.
    pub fn serialize<S>(value: &B256, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&encode_hex_bytes(value.as_slice()))
    }
}

/// Checksummed account addresses: any input casing, EIP-55 on output.
pub mod checksum_address {
    use super::*;
    use serde::{de, Deserialize, Deserializer, Serializer};

    /// Deserializes from a 40-digit hex string of any casing.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Address, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        decode_address(&s).map_err(de::Error::custom)
    }

    /// Serializes with EIP-55 checksum casing.
    pub fn serialize<S>(value: &Address, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&encode_address(value))
    }
}

/// Redistribution percentages, bare integers in `0..=100`.
pub mod percent {
    use super::*;
    use serde::{de, Deserialize, Deserializer, Serializer};

    /// Deserializes a bare integer, rejecting values outside `0..=100`.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<u64, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = i128::deserialize(deserializer)?;
        if !(0..=100).contains(&value) {
            return Err(de::Error::custom(CodecError::Range { value, min: 0, max: 100 }))
        }
        Ok(value as u64)
    }

    /// Serializes as a bare integer.
    pub fn serialize<S>(value: &u64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(*value)
    }
}

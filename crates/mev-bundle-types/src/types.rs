//! MEV bundle type bindings

use alloy_primitives::{Address, Bytes, B256};
use serde::{
    de,
    ser::{SerializeSeq, Serializer},
    Deserialize, Deserializer, Serialize,
};
use tracing::trace;

use crate::{
    codec,
    error::{CodecError, WireError},
};

/// A bundle of transactions to send to the matchmaker.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Bundle {
    /// The version of the MEV-share API to use.
    #[serde(rename = "version")]
    pub protocol_version: ProtocolVersion,
    /// Data used by block builders to check if the bundle should be considered for inclusion.
    pub inclusion: Inclusion,
    /// The transactions to include in the bundle, in execution order.
    #[serde(rename = "body")]
    pub bundle_body: Vec<BundleItem>,
    /// Requirements for the bundle to be included in the block.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validity: Option<Validity>,
    /// Preferences on what data should be shared about the bundle and its transactions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub privacy: Option<Privacy>,
}

impl Bundle {
    /// Creates an empty bundle targeting the given block, on the current
    /// protocol version.
    pub fn build_for_block(block: u64) -> Self {
        Self { inclusion: Inclusion { block, max_block: None }, ..Default::default() }
    }

    /// Sets the last block the bundle is valid for.
    pub fn with_max_block(mut self, max_block: u64) -> Self {
        self.inclusion.max_block = Some(max_block);
        self
    }

    /// Sets the protocol version.
    pub fn with_version(mut self, version: ProtocolVersion) -> Self {
        self.protocol_version = version;
        self
    }

    /// Sets the inclusion requirements.
    pub fn with_validity(mut self, validity: Validity) -> Self {
        self.validity = Some(validity);
        self
    }

    /// Sets the privacy preferences.
    pub fn with_privacy(mut self, privacy: Privacy) -> Self {
        self.privacy = Some(privacy);
        self
    }

    /// Appends a signed transaction to the bundle body.
    pub fn append_transaction(mut self, tx: Bytes, can_revert: bool) -> Self {
        self.bundle_body.push(BundleItem::Tx { tx, can_revert });
        self
    }

    /// Appends a backrun reference to the bundle body.
    pub fn append_hash(mut self, hash: B256) -> Self {
        self.bundle_body.push(BundleItem::Hash { hash });
        self
    }

    /// Appends a nested bundle to the bundle body.
    ///
    /// The nested bundle is owned by this one, so reference cycles cannot be
    /// constructed and serialization always terminates.
    pub fn append_nested(mut self, bundle: Bundle) -> Self {
        self.bundle_body.push(BundleItem::Bundle { bundle: Box::new(bundle) });
        self
    }

    /// Decodes a bundle from wire-format JSON text.
    ///
    /// Decoding is all-or-nothing: any field-level validation failure aborts
    /// the whole decode, and the returned [`WireError`] names the offending
    /// field, e.g. `body[2].tx`.
    pub fn from_wire(json: &str) -> Result<Self, WireError> {
        let mut deserializer = serde_json::Deserializer::from_str(json);
        let bundle: Self =
            serde_path_to_error::deserialize(&mut deserializer).map_err(WireError::from_serde)?;
        deserializer.end().map_err(WireError::at_document)?;
        trace!(
            version = ?bundle.protocol_version,
            body_items = bundle.bundle_body.len(),
            "decoded bundle"
        );
        Ok(bundle)
    }

    /// Encodes the bundle into its wire-format JSON value.
    ///
    /// Field names use the wire aliases (`maxBlock`, `canRevert`,
    /// `refundConfig`) and absent optional fields are omitted rather than
    /// emitted as `null`.
    pub fn to_wire(&self) -> serde_json::Value {
        serde_json::to_value(self).expect("validated bundle is always serializable")
    }
}

/// Data used by block builders to check if the bundle should be considered for inclusion.
#[derive(Clone, Debug, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Inclusion {
    /// The first block the bundle is valid for.
    #[serde(with = "codec::hex_u64")]
    pub block: u64,
    /// The last block the bundle is valid for.
    #[serde(with = "codec::hex_u64_opt", skip_serializing_if = "Option::is_none")]
    pub max_block: Option<u64>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawInclusion {
    #[serde(with = "codec::hex_u64")]
    block: u64,
    #[serde(default, with = "codec::hex_u64_opt")]
    max_block: Option<u64>,
}

impl<'de> Deserialize<'de> for Inclusion {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawInclusion::deserialize(deserializer)?;
        if let Some(max_block) = raw.max_block {
            if max_block < raw.block {
                return Err(de::Error::custom(CodecError::Range {
                    value: max_block as i128,
                    min: raw.block as i128,
                    max: u64::MAX as i128,
                }))
            }
        }
        Ok(Self { block: raw.block, max_block: raw.max_block })
    }
}

/// One element of a bundle body: a backrun reference, a signed transaction,
/// or a nested bundle.
///
/// The wire format carries no tag; the shape is resolved from which fields
/// are present, and re-encoding emits exactly the fields of the resolved
/// shape.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum BundleItem {
    /// The hash of either a transaction or bundle we are trying to backrun.
    Hash {
        /// Tx hash.
        #[serde(with = "codec::hex_b256")]
        hash: B256,
    },
    /// A new signed transaction.
    #[serde(rename_all = "camelCase")]
    Tx {
        /// Bytes of the signed transaction.
        #[serde(with = "codec::hex_bytes")]
        tx: Bytes,
        /// If true, the transaction can revert without the bundle being considered invalid.
        can_revert: bool,
    },
    /// A nested bundle.
    Bundle {
        /// The inner bundle, decoded recursively.
        bundle: Box<Bundle>,
    },
}

/// Mirror of [`BundleItem`] with every field optional, for shape resolution.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawItem {
    #[serde(default, deserialize_with = "opt_hex_bytes")]
    tx: Option<Bytes>,
    can_revert: Option<bool>,
    #[serde(default, deserialize_with = "opt_hex_b256")]
    hash: Option<B256>,
    bundle: Option<Bundle>,
}

fn opt_hex_bytes<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Bytes>, D::Error> {
    Option::<String>::deserialize(deserializer)?
        .map(|s| codec::decode_hex_bytes(&s, None).map(Bytes::from))
        .transpose()
        .map_err(de::Error::custom)
}

fn opt_hex_b256<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<B256>, D::Error> {
    Option::<String>::deserialize(deserializer)?
        .map(|s| codec::decode_hex_bytes(&s, Some(32)).map(|bytes| B256::from_slice(&bytes)))
        .transpose()
        .map_err(de::Error::custom)
}

impl<'de> Deserialize<'de> for BundleItem {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawItem::deserialize(deserializer)?;
        // resolved in order: tx shape, then hash shape, then nested shape
        let claims_tx = raw.tx.is_some() || raw.can_revert.is_some();
        if claims_tx {
            if raw.hash.is_some() || raw.bundle.is_some() {
                return Err(de::Error::custom(CodecError::VariantResolution(
                    "fields from more than one item shape are present",
                )))
            }
            let tx = raw.tx.ok_or_else(|| de::Error::custom(CodecError::MissingField("tx")))?;
            let can_revert = raw
                .can_revert
                .ok_or_else(|| de::Error::custom(CodecError::MissingField("canRevert")))?;
            return Ok(Self::Tx { tx, can_revert })
        }
        match (raw.hash, raw.bundle) {
            (Some(_), Some(_)) => Err(de::Error::custom(CodecError::VariantResolution(
                "fields from more than one item shape are present",
            ))),
            (Some(hash), None) => Ok(Self::Hash { hash }),
            (None, Some(bundle)) => Ok(Self::Bundle { bundle: Box::new(bundle) }),
            (None, None) => Err(de::Error::custom(CodecError::VariantResolution(
                "expected one of `tx`, `hash`, or `bundle`",
            ))),
        }
    }
}

/// Requirements for the bundle to be included in the block.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Validity {
    /// Specifies the minimum percent of a given bundle's earnings to redistribute
    /// for it to be included in a builder's block.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refund: Option<Vec<Refund>>,
    /// Specifies what addresses should receive what percent of the overall refund for this bundle,
    /// if it is enveloped by another bundle (eg. a searcher backrun).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refund_config: Option<Vec<RefundConfig>>,
}

/// Specifies the minimum percent of a given bundle's earnings to redistribute
/// for it to be included in a builder's block.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Refund {
    /// The index of the transaction in the bundle.
    pub body_idx: u64,
    /// The minimum percent of the bundle's earnings to redistribute.
    #[serde(with = "codec::percent")]
    pub percent: u64,
}

/// Specifies what addresses should receive what percent of the overall refund for this bundle,
/// if it is enveloped by another bundle (eg. a searcher backrun).
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RefundConfig {
    /// The address to refund.
    #[serde(with = "codec::checksum_address")]
    pub address: Address,
    /// The minimum percent of the bundle's earnings to redistribute.
    #[serde(with = "codec::percent")]
    pub percent: u64,
}

/// Preferences on what data should be shared about the bundle and its transactions
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Privacy {
    /// Hints on what data should be shared about the bundle and its transactions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hints: Option<PrivacyHint>,
    /// Names of the builders that should be allowed to see the bundle/transaction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub builders: Option<Vec<String>>,
}

/// Hints on what data should be shared about the bundle and its transactions
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct PrivacyHint {
    /// The calldata of the bundle's transactions should be shared.
    pub calldata: bool,
    /// The address of the bundle's transactions should be shared.
    pub contract_address: bool,
    /// The logs of the bundle's transactions should be shared.
    pub logs: bool,
    /// The function selector of the bundle's transactions should be shared.
    pub function_selector: bool,
    /// The hash of the bundle's transactions should be shared.
    pub hash: bool,
    /// The hash of the bundle should be shared.
    pub tx_hash: bool,
}

#[allow(missing_docs)]
impl PrivacyHint {
    pub fn with_calldata(mut self) -> Self {
        self.calldata = true;
        self
    }

    pub fn with_contract_address(mut self) -> Self {
        self.contract_address = true;
        self
    }

    pub fn with_logs(mut self) -> Self {
        self.logs = true;
        self
    }

    pub fn with_function_selector(mut self) -> Self {
        self.function_selector = true;
        self
    }

    pub fn with_hash(mut self) -> Self {
        self.hash = true;
        self
    }

    pub fn with_tx_hash(mut self) -> Self {
        self.tx_hash = true;
        self
    }

    pub fn has_calldata(&self) -> bool {
        self.calldata
    }

    pub fn has_contract_address(&self) -> bool {
        self.contract_address
    }

    pub fn has_logs(&self) -> bool {
        self.logs
    }

    pub fn has_function_selector(&self) -> bool {
        self.function_selector
    }

    pub fn has_hash(&self) -> bool {
        self.hash
    }

    pub fn has_tx_hash(&self) -> bool {
        self.tx_hash
    }

    fn num_hints(&self) -> usize {
        let mut num_hints = 0;
        if self.calldata {
            num_hints += 1;
        }
        if self.contract_address {
            num_hints += 1;
        }
        if self.logs {
            num_hints += 1;
        }
        if self.function_selector {
            num_hints += 1;
        }
        if self.hash {
            num_hints += 1;
        }
        if self.tx_hash {
            num_hints += 1;
        }
        num_hints
    }
}

impl Serialize for PrivacyHint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.num_hints()))?;
        if self.calldata {
            seq.serialize_element("calldata")?;
        }
        if self.contract_address {
            seq.serialize_element("contract_address")?;
        }
        if self.logs {
            seq.serialize_element("logs")?;
        }
        if self.function_selector {
            seq.serialize_element("function_selector")?;
        }
        if self.hash {
            seq.serialize_element("hash")?;
        }
        if self.tx_hash {
            seq.serialize_element("tx_hash")?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for PrivacyHint {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let hints = Vec::<String>::deserialize(deserializer)?;
        let mut privacy_hint = PrivacyHint::default();
        for hint in hints {
            match hint.as_str() {
                "calldata" => privacy_hint.calldata = true,
                "contract_address" => privacy_hint.contract_address = true,
                "logs" => privacy_hint.logs = true,
                "function_selector" => privacy_hint.function_selector = true,
                "hash" => privacy_hint.hash = true,
                "tx_hash" => privacy_hint.tx_hash = true,
                _ => {
                    return Err(de::Error::custom(CodecError::UnknownEnumValue(hint)))
                }
            }
        }
        Ok(privacy_hint)
    }
}

/// The version of the MEV-share API to use.
#[derive(Deserialize, Debug, Serialize, Clone, Default, PartialEq, Eq)]
pub enum ProtocolVersion {
    /// The beta-1 version of the API.
    #[serde(rename = "beta-1")]
    Beta1,
    /// The 0.1 version of the API, the current one.
    #[default]
    #[serde(rename = "v0.1")]
    V0_1,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const TX: &str = "0x02f86b0180843b9aca00852ecc889a0082520894c87037874aed04e51c29f582394217a0a2b89d808080c080a0a463985c616dd8ee17d7ef9112af4e6e06a27b071525b42182fe7b0b5c8b4925a00af5ca177ffef2ff28449292505d41be578bebb77110dfc09361d2fb56998260";
    const REFUND_ADDRESS: &str = "0x8EC1237b1E80A6adf191F40D4b7D095E21cdb18f";

    #[test]
    fn can_deserialize_simple() {
        let str = r#"
        {
            "version": "v0.1",
            "inclusion": {
                "block": "0x1"
            },
            "body": [{
                "tx": "0x02f86b0180843b9aca00852ecc889a0082520894c87037874aed04e51c29f582394217a0a2b89d808080c080a0a463985c616dd8ee17d7ef9112af4e6e06a27b071525b42182fe7b0b5c8b4925a00af5ca177ffef2ff28449292505d41be578bebb77110dfc09361d2fb56998260",
                "canRevert": false
            }]
        }
        "#;
        let bundle = Bundle::from_wire(str).unwrap();
        assert_eq!(bundle.protocol_version, ProtocolVersion::V0_1);
        assert_eq!(bundle.inclusion, Inclusion { block: 1, max_block: None });
        assert_eq!(
            bundle.bundle_body,
            vec![BundleItem::Tx { tx: TX.parse().unwrap(), can_revert: false }]
        );
    }

    #[test]
    fn can_deserialize_complex() {
        let str = r#"
        {
            "version": "v0.1",
            "inclusion": {
                "block": "0x1"
            },
            "body": [{
                "tx": "0x02f86b0180843b9aca00852ecc889a0082520894c87037874aed04e51c29f582394217a0a2b89d808080c080a0a463985c616dd8ee17d7ef9112af4e6e06a27b071525b42182fe7b0b5c8b4925a00af5ca177ffef2ff28449292505d41be578bebb77110dfc09361d2fb56998260",
                "canRevert": false
            }],
            "privacy": {
                "hints": [
                  "calldata"
                ]
              },
              "validity": {
                "refundConfig": [
                  {
                    "address": "0x8EC1237b1E80A6adf191F40D4b7D095E21cdb18f",
                    "percent": 100
                  }
                ]
              }
        }
        "#;
        let bundle = Bundle::from_wire(str).unwrap();
        assert_eq!(
            bundle.bundle_body[0],
            BundleItem::Tx { tx: TX.parse().unwrap(), can_revert: false }
        );
        assert_eq!(
            bundle.privacy.as_ref().unwrap().hints,
            Some(PrivacyHint::default().with_calldata())
        );
        let refund_config = bundle.validity.as_ref().unwrap().refund_config.as_ref().unwrap();
        assert_eq!(refund_config[0].address, REFUND_ADDRESS.parse::<Address>().unwrap());

        // the re-encoded address carries the checksum casing regardless of
        // how the decoded input was cased
        let wire = bundle.to_wire();
        assert_eq!(wire["validity"]["refundConfig"][0]["address"], REFUND_ADDRESS);
        assert_eq!(wire["body"][0]["tx"], TX);
        assert_eq!(wire["privacy"]["hints"], json!(["calldata"]));
    }

    #[test]
    fn can_serialize_complex() {
        let bundle = Bundle::build_for_block(1)
            .append_transaction(TX.parse().unwrap(), false)
            .with_validity(Validity {
                refund_config: Some(vec![RefundConfig {
                    address: REFUND_ADDRESS.parse().unwrap(),
                    percent: 100,
                }]),
                ..Default::default()
            })
            .with_privacy(Privacy {
                hints: Some(PrivacyHint::default().with_calldata()),
                ..Default::default()
            });
        let expected = json!({
            "version": "v0.1",
            "inclusion": { "block": "0x1" },
            "body": [{ "tx": TX, "canRevert": false }],
            "validity": {
                "refundConfig": [{ "address": REFUND_ADDRESS, "percent": 100 }]
            },
            "privacy": { "hints": ["calldata"] }
        });
        assert_eq!(bundle.to_wire(), expected);
    }

    #[test]
    fn wire_round_trip() {
        let inner = Bundle::build_for_block(2).append_hash(B256::repeat_byte(0x11));
        let bundle = Bundle::build_for_block(1)
            .with_max_block(5)
            .with_version(ProtocolVersion::Beta1)
            .append_hash(B256::repeat_byte(0x22))
            .append_transaction(TX.parse().unwrap(), true)
            .append_nested(inner)
            .with_validity(Validity {
                refund: Some(vec![Refund { body_idx: 1, percent: 90 }]),
                refund_config: Some(vec![RefundConfig {
                    address: REFUND_ADDRESS.parse().unwrap(),
                    percent: 100,
                }]),
            })
            .with_privacy(Privacy {
                hints: Some(PrivacyHint::default().with_calldata().with_logs()),
                builders: Some(vec!["flashbots".to_string()]),
            });
        let decoded = Bundle::from_wire(&bundle.to_wire().to_string()).unwrap();
        assert_eq!(decoded, bundle);
    }

    #[test]
    fn serializes_canonical_hex_and_omits_absent_fields() {
        let bundle = Bundle::build_for_block(255);
        assert_eq!(
            bundle.to_wire(),
            json!({
                "version": "v0.1",
                "inclusion": { "block": "0xff" },
                "body": []
            })
        );
    }

    #[test]
    fn accepts_legacy_integer_block_and_null_max_block() {
        let bundle = Bundle::from_wire(
            r#"{"version":"v0.1","inclusion":{"block":1,"maxBlock":null},"body":[]}"#,
        )
        .unwrap();
        assert_eq!(bundle.inclusion, Inclusion { block: 1, max_block: None });
    }

    #[test]
    fn rejects_max_block_below_block() {
        let err = Bundle::from_wire(
            r#"{"version":"v0.1","inclusion":{"block":"0x20","maxBlock":"0x1f"},"body":[]}"#,
        )
        .unwrap_err();
        assert_eq!(err.path(), "inclusion");
        assert!(err.message().contains("out of range"), "{err}");
    }

    #[test]
    fn rejects_ambiguous_body_item() {
        let err = Bundle::from_wire(&format!(
            r#"{{"version":"v0.1","inclusion":{{"block":"0x1"}},"body":[{{"tx":"{TX}","canRevert":false,"hash":"0x{}"}}]}}"#,
            "11".repeat(32)
        ))
        .unwrap_err();
        assert_eq!(err.path(), "body[0]");
        assert!(err.message().contains("more than one item shape"), "{err}");
    }

    #[test]
    fn rejects_body_item_matching_no_shape() {
        let err = Bundle::from_wire(
            r#"{"version":"v0.1","inclusion":{"block":"0x1"},"body":[{"gas":"0x1"}]}"#,
        )
        .unwrap_err();
        assert_eq!(err.path(), "body[0]");
        assert!(err.message().contains("expected one of"), "{err}");
    }

    #[test]
    fn rejects_tx_item_without_can_revert() {
        let err = Bundle::from_wire(&format!(
            r#"{{"version":"v0.1","inclusion":{{"block":"0x1"}},"body":[{{"tx":"{TX}"}}]}}"#
        ))
        .unwrap_err();
        assert_eq!(err.path(), "body[0]");
        assert!(err.message().contains("missing required field `canRevert`"), "{err}");
    }

    #[test]
    fn rejects_wrong_hash_length() {
        let err = Bundle::from_wire(&format!(
            r#"{{"version":"v0.1","inclusion":{{"block":"0x1"}},"body":[{{"hash":"0x{}"}}]}}"#,
            "11".repeat(31)
        ))
        .unwrap_err();
        assert_eq!(err.path(), "body[0]");
        assert!(err.message().contains("expected 32 bytes"), "{err}");
    }

    #[test]
    fn rejects_percent_out_of_range() {
        let err = Bundle::from_wire(&format!(
            r#"{{"version":"v0.1","inclusion":{{"block":"0x1"}},"body":[],"validity":{{"refundConfig":[{{"address":"{REFUND_ADDRESS}","percent":101}}]}}}}"#
        ))
        .unwrap_err();
        assert_eq!(err.path(), "validity.refundConfig[0].percent");
        assert!(err.message().contains("out of range 0..=100"), "{err}");

        let err = Bundle::from_wire(
            r#"{"version":"v0.1","inclusion":{"block":"0x1"},"body":[],"validity":{"refund":[{"bodyIdx":0,"percent":-1}]}}"#,
        )
        .unwrap_err();
        assert_eq!(err.path(), "validity.refund[0].percent");
        assert!(err.message().contains("out of range 0..=100"), "{err}");
    }

    #[test]
    fn rejects_unknown_privacy_hint() {
        let err = Bundle::from_wire(
            r#"{"version":"v0.1","inclusion":{"block":"0x1"},"body":[],"privacy":{"hints":["calldata2"]}}"#,
        )
        .unwrap_err();
        assert_eq!(err.path(), "privacy.hints");
        assert!(err.message().contains("unknown enum value `calldata2`"), "{err}");
    }

    #[test]
    fn rejects_unknown_version() {
        let err =
            Bundle::from_wire(r#"{"version":"v0.2","inclusion":{"block":"0x1"},"body":[]}"#)
                .unwrap_err();
        assert_eq!(err.path(), "version");
        assert!(err.message().contains("unknown variant"), "{err}");
    }

    #[test]
    fn builder_appends_in_order() {
        let bundle = Bundle::build_for_block(1)
            .append_transaction(TX.parse().unwrap(), false)
            .append_hash(B256::repeat_byte(0x11))
            .append_nested(Bundle::build_for_block(2));
        assert_eq!(bundle.protocol_version, ProtocolVersion::V0_1);
        assert_eq!(bundle.inclusion.block, 1);
        assert_eq!(bundle.bundle_body.len(), 3);
        assert!(matches!(bundle.bundle_body[0], BundleItem::Tx { .. }));
        assert!(matches!(bundle.bundle_body[1], BundleItem::Hash { .. }));
        assert!(matches!(bundle.bundle_body[2], BundleItem::Bundle { .. }));
    }

    #[test]
    fn nested_bundle_round_trips_as_nested() {
        let bundle = Bundle::build_for_block(1).append_nested(
            Bundle::build_for_block(1).append_transaction(TX.parse().unwrap(), false),
        );
        let wire = bundle.to_wire();
        assert_eq!(wire["body"][0]["bundle"]["body"][0]["canRevert"], json!(false));
        let decoded = Bundle::from_wire(&wire.to_string()).unwrap();
        assert_eq!(decoded, bundle);
    }

    #[test]
    fn can_serialize_privacy_hint() {
        let hint = PrivacyHint {
            calldata: true,
            contract_address: true,
            logs: true,
            function_selector: true,
            hash: true,
            tx_hash: true,
        };
        let expected =
            r#"["calldata","contract_address","logs","function_selector","hash","tx_hash"]"#;
        let actual = serde_json::to_string(&hint).unwrap();
        assert_eq!(actual, expected);
    }

    #[test]
    fn can_deserialize_privacy_hint() {
        let hint = PrivacyHint {
            calldata: true,
            contract_address: false,
            logs: true,
            function_selector: false,
            hash: true,
            tx_hash: false,
        };
        let expected = r#"["calldata","logs","hash"]"#;
        let actual: PrivacyHint = serde_json::from_str(expected).unwrap();
        assert_eq!(actual, hint);
    }
}

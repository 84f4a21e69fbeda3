// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Hand-built calldata for the diamond's functions.
//!
//! A [`Payload`] is the 4-byte [`Selector`] of a function signature followed by the standard ABI
//! encoding of its arguments. Read calls used here are nullary, so their payload is the selector
//! alone. Return data is only ever decoded as a single `uint256`.

use std::{fmt, str::FromStr};

use alloy::{
    dyn_abi::{DynSolType, DynSolValue},
    primitives::{keccak256, Bytes, U256},
};

/// Width in bytes of an ABI word, and the maximum width of a decoded `uint256`.
pub const WORD_SIZE: usize = 32;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    #[error("encoding error: {0}")]
    Encoding(String),
    #[error("decoding error: {0}")]
    Decoding(String),
}

impl CodecError {
    fn encoding(msg: impl fmt::Display) -> Self {
        Self::Encoding(msg.to_string())
    }

    fn decoding(msg: impl fmt::Display) -> Self {
        Self::Decoding(msg.to_string())
    }
}

/// First four bytes of the keccak-256 hash of a function signature.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Selector([u8; 4]);

impl Selector {
    pub const fn new(bytes: [u8; 4]) -> Self {
        Self(bytes)
    }

    /// Hashes the signature string exactly as given.
    pub fn of(signature: &str) -> Self {
        let hash = keccak256(signature.as_bytes());
        Self([hash[0], hash[1], hash[2], hash[3]])
    }

    pub const fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }

    /// The selector as an ABI `bytes4` value.
    pub fn to_sol_value(self) -> DynSolValue {
        DynSolValue::FixedBytes(alloy::primitives::B256::right_padding_from(&self.0), 4)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl FromStr for Selector {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let text = text.strip_prefix("0x").unwrap_or(text);
        let bytes = hex::decode(text).map_err(CodecError::encoding)?;
        let bytes: [u8; 4] = bytes
            .try_into()
            .map_err(|_| CodecError::encoding(format!("selector {s} is not 4 bytes")))?;
        Ok(Self(bytes))
    }
}

/// Raw call data: `selector ‖ encoded arguments`.
#[derive(Clone, PartialEq, Eq)]
pub struct Payload(Bytes);

impl Payload {
    fn new(selector: Selector, args: &[u8]) -> Self {
        let mut data = Vec::with_capacity(4 + args.len());
        data.extend_from_slice(selector.as_bytes());
        data.extend_from_slice(args);
        Self(data.into())
    }

    pub fn selector(&self) -> Selector {
        let mut bytes = [0; 4];
        bytes.copy_from_slice(&self.0[..4]);
        Selector(bytes)
    }

    /// The encoded arguments following the selector.
    pub fn args(&self) -> &[u8] {
        &self.0[4..]
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_bytes(&self) -> Bytes {
        self.0.clone()
    }
}

impl fmt::Display for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(&self.0))
    }
}

impl fmt::Debug for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// A function signature together with typed argument values.
#[derive(Clone, Debug, PartialEq)]
pub struct CallDescriptor {
    signature: String,
    types: Vec<DynSolType>,
    values: Vec<DynSolValue>,
}

impl CallDescriptor {
    /// Checks that `values` match `types` one to one, and that the parameter list written in
    /// `signature` declares the same types.
    pub fn new(
        signature: impl Into<String>,
        types: Vec<DynSolType>,
        values: Vec<DynSolValue>,
    ) -> Result<Self, CodecError> {
        let signature = signature.into();
        let declared = signature_types(&signature)?;
        if declared != types {
            return Err(CodecError::encoding(format!(
                "signature {signature} does not declare argument types ({})",
                type_list(&types)
            )));
        }
        if types.len() != values.len() {
            return Err(CodecError::encoding(format!(
                "{signature} takes {} arguments, got {}",
                types.len(),
                values.len()
            )));
        }
        for (i, (ty, value)) in types.iter().zip(&values).enumerate() {
            if !ty.matches(value) {
                return Err(CodecError::encoding(format!(
                    "argument {i} of {signature} is not a {}",
                    ty.sol_type_name()
                )));
            }
        }
        Ok(Self {
            signature,
            types,
            values,
        })
    }

    /// Parses type names and coerces textual argument values, the way they arrive from an input
    /// field or the command line.
    pub fn parse(
        signature: impl Into<String>,
        types: &[&str],
        values: &[impl AsRef<str>],
    ) -> Result<Self, CodecError> {
        let types = types
            .iter()
            .map(|ty| DynSolType::parse(ty).map_err(CodecError::encoding))
            .collect::<Result<Vec<_>, _>>()?;
        Self::coerce(signature, types, values)
    }

    /// Like [`CallDescriptor::parse`], but reads the argument types from the signature itself.
    pub fn from_signature(
        signature: impl Into<String>,
        values: &[impl AsRef<str>],
    ) -> Result<Self, CodecError> {
        let signature = signature.into();
        let types = signature_types(&signature)?;
        Self::coerce(signature, types, values)
    }

    fn coerce(
        signature: impl Into<String>,
        types: Vec<DynSolType>,
        values: &[impl AsRef<str>],
    ) -> Result<Self, CodecError> {
        let signature = signature.into();
        if types.len() != values.len() {
            return Err(CodecError::encoding(format!(
                "{signature} takes {} arguments, got {}",
                types.len(),
                values.len()
            )));
        }
        let values = types
            .iter()
            .zip(values)
            .map(|(ty, value)| {
                let value = value.as_ref();
                ty.coerce_str(value).map_err(|err| {
                    CodecError::encoding(format!(
                        "could not parse {value:?} as {}: {err}",
                        ty.sol_type_name()
                    ))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(signature, types, values)
    }

    pub fn signature(&self) -> &str {
        &self.signature
    }

    pub fn types(&self) -> &[DynSolType] {
        &self.types
    }

    pub fn values(&self) -> &[DynSolValue] {
        &self.values
    }

    pub fn selector(&self) -> Selector {
        Selector::of(&self.signature)
    }

    pub fn encode(&self) -> Payload {
        build_call(self)
    }
}

/// Payload of a nullary call: just the selector.
pub fn build_read_call(signature: &str) -> Result<Payload, CodecError> {
    let types = signature_types(signature)?;
    if !types.is_empty() {
        return Err(CodecError::encoding(format!(
            "read call {signature} must not take arguments"
        )));
    }
    Ok(Payload::new(Selector::of(signature), &[]))
}

/// Payload of a call with arguments given as text, coerced into their declared types.
pub fn build_write_call(
    signature: &str,
    types: &[&str],
    values: &[impl AsRef<str>],
) -> Result<Payload, CodecError> {
    Ok(CallDescriptor::parse(signature, types, values)?.encode())
}

/// Encodes an already validated descriptor.
pub fn build_call(call: &CallDescriptor) -> Payload {
    let args = DynSolValue::Tuple(call.values.clone()).abi_encode_params();
    Payload::new(call.selector(), &args)
}

/// Decodes ABI-encoded arguments back into values of the given types.
pub fn decode_params(types: &[DynSolType], data: &[u8]) -> Result<Vec<DynSolValue>, CodecError> {
    let tuple = DynSolType::Tuple(types.to_vec());
    match tuple.abi_decode_params(data).map_err(CodecError::decoding)? {
        DynSolValue::Tuple(values) => Ok(values),
        value => Ok(vec![value]),
    }
}

/// Interprets big-endian bytes as a `uint256`.
pub fn decode_u256(data: &[u8]) -> Result<U256, CodecError> {
    if data.is_empty() {
        return Err(CodecError::decoding("empty return data"));
    }
    U256::try_from_be_slice(data).ok_or_else(|| {
        CodecError::decoding(format!(
            "{} bytes do not fit in a uint256",
            data.len()
        ))
    })
}

/// Interprets big-endian bytes as a `uint256` and renders it in decimal.
pub fn decode_uint(data: &[u8]) -> Result<String, CodecError> {
    decode_u256(data).map(|value| value.to_string())
}

/// Argument types written between the parentheses of a function signature.
pub fn signature_types(signature: &str) -> Result<Vec<DynSolType>, CodecError> {
    let invalid = || CodecError::encoding(format!("invalid function signature {signature:?}"));
    let (name, rest) = signature.split_once('(').ok_or_else(invalid)?;
    let params = rest.strip_suffix(')').ok_or_else(invalid)?;
    let valid_name = name
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$');
    if !valid_name || params.chars().any(char::is_whitespace) {
        return Err(invalid());
    }
    if params.is_empty() {
        return Ok(Vec::new());
    }
    match DynSolType::parse(&format!("({params})")).map_err(CodecError::encoding)? {
        DynSolType::Tuple(types) => Ok(types),
        ty => Ok(vec![ty]),
    }
}

fn type_list(types: &[DynSolType]) -> String {
    types
        .iter()
        .map(|ty| ty.sol_type_name().into_owned())
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use alloy::{
        json_abi::Function,
        primitives::{address, Address},
        sol,
        sol_types::SolCall,
    };
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    use super::*;

    sol! {
        function getValue() external view returns (uint256);
        function setValue(uint256 value) external;
        function transfer(address to, uint256 amount) external returns (bool);
    }

    #[test]
    fn read_call_is_the_selector() {
        let payload = build_read_call("getValue()").unwrap();
        assert_eq!(payload.len(), 4);
        assert_eq!(payload.as_bytes(), &keccak256("getValue()")[..4]);
        assert_eq!(payload.as_bytes(), getValueCall::SELECTOR.as_slice());
        assert_eq!(payload, build_read_call("getValue()").unwrap());
    }

    #[test]
    fn selector_matches_json_abi() {
        for sig in ["getValue()", "init()", "owner()", "facets()"] {
            let function = Function::parse(sig).unwrap();
            assert_eq!(Selector::of(sig).as_bytes(), function.selector().as_slice());
        }
    }

    #[test]
    fn read_call_rejects_arguments() {
        let err = build_read_call("setValue(uint256)").unwrap_err();
        assert!(matches!(err, CodecError::Encoding(_)));
    }

    #[test]
    fn write_call_encodes_uint() {
        let payload = build_write_call("setValue(uint256)", &["uint256"], &["42"]).unwrap();
        assert_eq!(payload.len(), 4 + WORD_SIZE);
        assert_eq!(payload.selector(), Selector::of("setValue(uint256)"));
        let expected = setValueCall {
            value: U256::from(42),
        }
        .abi_encode();
        assert_eq!(payload.as_bytes(), expected.as_slice());
    }

    #[test]
    fn write_call_round_trips() {
        const TO: Address = address!("5729698F1a4B1DDEA9dB9B3b067656fDa82701BA");
        let call = CallDescriptor::from_signature(
            "transfer(address,uint256)",
            &[TO.to_string(), "1000000000000000000".to_string()],
        )
        .unwrap();
        let payload = call.encode();
        assert_eq!(payload.len(), 4 + 2 * WORD_SIZE);

        let decoded = decode_params(call.types(), payload.args()).unwrap();
        assert_eq!(decoded, call.values());
        assert_eq!(
            payload.as_bytes(),
            transferCall {
                to: TO,
                amount: U256::from(10).pow(U256::from(18)),
            }
            .abi_encode()
            .as_slice()
        );
    }

    #[test]
    fn write_call_rejects_non_numeric() {
        let err = build_write_call("setValue(uint256)", &["uint256"], &["forty-two"]).unwrap_err();
        assert!(matches!(err, CodecError::Encoding(_)));

        let err = build_write_call("setValue(uint256)", &["uint256"], &["-1"]).unwrap_err();
        assert!(matches!(err, CodecError::Encoding(_)));
    }

    #[test]
    fn write_call_rejects_mismatched_shapes() {
        let err = build_write_call("setValue(uint256)", &["uint256"], &["1", "2"]).unwrap_err();
        assert!(matches!(err, CodecError::Encoding(_)));

        let err = build_write_call("setValue(uint256)", &["address"], &["1"]).unwrap_err();
        assert!(matches!(err, CodecError::Encoding(_)));

        let err = CallDescriptor::new(
            "setValue(uint256)",
            vec![DynSolType::Uint(256)],
            vec![DynSolValue::Bool(true)],
        )
        .unwrap_err();
        assert!(matches!(err, CodecError::Encoding(_)));
    }

    #[test]
    fn signature_types_parse() {
        assert_eq!(signature_types("getValue()").unwrap(), vec![]);
        assert_eq!(
            signature_types("diamondCut((address,uint8,bytes4[])[],address,bytes)").unwrap(),
            vec![
                DynSolType::Array(Box::new(DynSolType::Tuple(vec![
                    DynSolType::Address,
                    DynSolType::Uint(8),
                    DynSolType::Array(Box::new(DynSolType::FixedBytes(4))),
                ]))),
                DynSolType::Address,
                DynSolType::Bytes,
            ]
        );
        assert!(signature_types("getValue").is_err());
        assert!(signature_types("(uint256)").is_err());
        assert!(signature_types("setValue(uint256, uint256)").is_err());
    }

    #[test]
    fn decode_uint_values() {
        assert_eq!(decode_uint(&[0; 32]).unwrap(), "0");
        assert_eq!(decode_uint(&[0]).unwrap(), "0");

        let mut one = [0u8; 32];
        one[31] = 1;
        assert_eq!(decode_uint(&one).unwrap(), "1");

        let max = [0xff; 32];
        assert_eq!(decode_uint(&max).unwrap(), U256::MAX.to_string());
    }

    #[test]
    fn decode_uint_rejects_malformed() {
        assert!(matches!(decode_uint(&[]), Err(CodecError::Decoding(_))));
        assert!(matches!(decode_uint(&[1; 33]), Err(CodecError::Decoding(_))));
    }

    #[test]
    fn selector_from_str() {
        let selector: Selector = "0x70480275".parse().unwrap();
        assert_eq!(selector.as_bytes(), &[0x70, 0x48, 0x02, 0x75]);
        assert_eq!(selector.to_string(), "0x70480275");
        assert!("0x704802".parse::<Selector>().is_err());
        assert!("0xzz480275".parse::<Selector>().is_err());
    }

    fn static_args(value: [u8; 32], to: [u8; 20], tag: [u8; 4], flag: bool) -> Vec<DynSolValue> {
        vec![
            DynSolValue::Uint(U256::from_be_bytes(value), 256),
            DynSolValue::Address(Address::from(to)),
            Selector::new(tag).to_sol_value(),
            DynSolValue::Bool(flag),
        ]
    }

    proptest! {
        #[test]
        fn nullary_payload_is_a_stable_selector(name in "[a-zA-Z_$][a-zA-Z0-9_$]{0,40}") {
            let signature = format!("{name}()");
            let payload = build_read_call(&signature).unwrap();
            prop_assert_eq!(payload.len(), 4);
            prop_assert_eq!(payload.as_bytes(), &keccak256(signature.as_bytes())[..4]);
            prop_assert_eq!(build_read_call(&signature).unwrap(), payload);
        }

        #[test]
        fn static_payload_is_one_word_per_arg(
            value in any::<[u8; 32]>(),
            to in any::<[u8; 20]>(),
            tag in any::<[u8; 4]>(),
            flag in any::<bool>(),
        ) {
            let signature = "f(uint256,address,bytes4,bool)";
            let values = static_args(value, to, tag, flag);
            let call = CallDescriptor::new(signature, signature_types(signature).unwrap(), values.clone())
                .unwrap();
            let payload = call.encode();
            prop_assert_eq!(payload.len(), 4 + values.len() * WORD_SIZE);
            prop_assert_eq!(payload.selector(), Selector::of(signature));
            prop_assert_eq!(decode_params(call.types(), payload.args()).unwrap(), values);
        }

        #[test]
        fn dynamic_payload_round_trips(
            value in any::<[u8; 32]>(),
            to in any::<[u8; 20]>(),
            data in proptest::collection::vec(any::<u8>(), 0..100),
            tags in proptest::collection::vec(any::<[u8; 4]>(), 0..8),
        ) {
            let signature = "f(uint256,address,bytes,bytes4[])";
            let values = vec![
                DynSolValue::Uint(U256::from_be_bytes(value), 256),
                DynSolValue::Address(Address::from(to)),
                DynSolValue::Bytes(data),
                DynSolValue::Array(tags.into_iter().map(|t| Selector::new(t).to_sol_value()).collect()),
            ];
            let call = CallDescriptor::new(signature, signature_types(signature).unwrap(), values.clone())
                .unwrap();
            let payload = call.encode();
            prop_assert_eq!(payload.args().len() % WORD_SIZE, 0);
            prop_assert_eq!(decode_params(call.types(), payload.args()).unwrap(), values);
        }

        #[test]
        fn uint_words_decode_to_their_value(value in any::<[u8; 32]>()) {
            prop_assert_eq!(
                decode_uint(&value).unwrap(),
                U256::from_be_bytes(value).to_string()
            );
        }
    }
}

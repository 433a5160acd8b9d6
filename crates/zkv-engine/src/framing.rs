// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Strict byte framing shared by every binding.
//!
//! Counted sequences are laid out as a `u64` little-endian element count
//! followed by that many fixed-width elements, which matches the arkworks
//! canonical encoding of `Vec<T>`. The declared count is always checked
//! against the bytes actually present before anything is allocated.
//!
//! Public witnesses carry a field tag ahead of their counted scalars: the
//! scalar-field modulus, little-endian, one scalar wide. Two curves whose
//! scalars share a width still produce different witness bytes for the
//! same public values.

use ark_ff::{BigInteger, PrimeField};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize, SerializationError};

use crate::error::ParseError;

/// Width of the element count prefix.
pub const COUNT_SIZE: usize = 8;

/// Tag identifying the scalar field `F` in a public witness.
pub fn field_tag<F: PrimeField>() -> Vec<u8> {
    F::MODULUS.to_bytes_le()
}

/// Check and strip a leading field tag.
pub fn strip_field_tag<'a>(bytes: &'a [u8], tag: &[u8]) -> Result<&'a [u8], ParseError> {
    if bytes.is_empty() {
        return Err(ParseError::Empty);
    }
    if bytes.len() < tag.len() {
        return Err(ParseError::UnexpectedEof);
    }
    bytes.strip_prefix(tag).ok_or(ParseError::ForeignField)
}

/// `tag | n | n × scalar` for the given pre-encoded scalars.
pub fn join_tagged<I>(tag: &[u8], elements: I) -> Vec<u8>
where
    I: ExactSizeIterator,
    I::Item: AsRef<[u8]>,
{
    let mut out = tag.to_vec();
    out.extend_from_slice(&join_counted(elements));
    out
}

/// Write `inputs` as a tagged public witness.
pub fn write_scalars<F: PrimeField>(inputs: &[F]) -> Result<Vec<u8>, SerializationError> {
    let encoded = inputs.iter().map(write_compressed).collect::<Result<Vec<_>, _>>()?;
    Ok(join_tagged(&field_tag::<F>(), encoded.iter()))
}

/// Read a tagged public witness of compressed arkworks scalars.
pub fn read_scalars<F: PrimeField>(bytes: &[u8]) -> Result<Vec<F>, ParseError> {
    let tag = field_tag::<F>();
    let body = strip_field_tag(bytes, &tag)?;
    split_counted(body, F::zero().compressed_size())?
        .map(|chunk| read_exact::<F>(chunk))
        .collect()
}

/// Split a counted sequence into its elements.
///
/// Fails on empty input, a short count prefix, a body shorter than the
/// declared count, or bytes left over after the last element.
pub fn split_counted(bytes: &[u8], elem_size: usize) -> Result<std::slice::ChunksExact<'_, u8>, ParseError> {
    if bytes.is_empty() {
        return Err(ParseError::Empty);
    }
    if elem_size == 0 {
        return Err(ParseError::Invalid("zero-width element".into()));
    }
    if bytes.len() < COUNT_SIZE {
        return Err(ParseError::UnexpectedEof);
    }
    let (prefix, body) = bytes.split_at(COUNT_SIZE);
    let mut count = [0u8; COUNT_SIZE];
    count.copy_from_slice(prefix);
    let count = usize::try_from(u64::from_le_bytes(count))
        .map_err(|_| ParseError::Invalid("element count overflows".into()))?;
    let expected = count
        .checked_mul(elem_size)
        .ok_or_else(|| ParseError::Invalid("element count overflows".into()))?;

    if body.len() < expected {
        return Err(ParseError::Length {
            expected: COUNT_SIZE + expected,
            actual: bytes.len(),
        });
    }
    if body.len() > expected {
        return Err(ParseError::TrailingBytes(body.len() - expected));
    }
    Ok(body.chunks_exact(elem_size))
}

/// Inverse of [`split_counted`].
pub fn join_counted<I>(elements: I) -> Vec<u8>
where
    I: ExactSizeIterator,
    I::Item: AsRef<[u8]>,
{
    let mut out = (elements.len() as u64).to_le_bytes().to_vec();
    for element in elements {
        out.extend_from_slice(element.as_ref());
    }
    out
}

pub fn write_compressed<T: CanonicalSerialize>(value: &T) -> Result<Vec<u8>, SerializationError> {
    let mut out = Vec::with_capacity(value.compressed_size());
    value.serialize_compressed(&mut out)?;
    Ok(out)
}

/// Deserialize a compressed, validated arkworks value that must span the
/// whole input.
pub fn read_exact<T: CanonicalDeserialize>(bytes: &[u8]) -> Result<T, ParseError> {
    if bytes.is_empty() {
        return Err(ParseError::Empty);
    }
    let mut reader = bytes;
    let value = T::deserialize_compressed(&mut reader)?;
    if !reader.is_empty() {
        return Err(ParseError::TrailingBytes(reader.len()));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_counted_accepts_exact_body() {
        let bytes = join_counted([[1u8; 4], [2u8; 4]].iter());
        let chunks: Vec<&[u8]> = split_counted(&bytes, 4).unwrap().collect();
        assert_eq!(chunks, vec![&[1u8; 4][..], &[2u8; 4][..]]);
    }

    #[test]
    fn split_counted_accepts_zero_elements() {
        let bytes = join_counted(std::iter::empty::<[u8; 4]>());
        assert_eq!(bytes.len(), COUNT_SIZE);
        assert_eq!(split_counted(&bytes, 4).unwrap().count(), 0);
    }

    #[test]
    fn split_counted_rejects_empty() {
        assert_eq!(split_counted(&[], 4).unwrap_err(), ParseError::Empty);
    }

    #[test]
    fn split_counted_rejects_short_prefix() {
        assert_eq!(split_counted(&[1, 0, 0], 4).unwrap_err(), ParseError::UnexpectedEof);
    }

    #[test]
    fn split_counted_rejects_truncated_body() {
        let mut bytes = join_counted([[7u8; 4], [8u8; 4]].iter());
        bytes.pop();
        assert_eq!(
            split_counted(&bytes, 4).unwrap_err(),
            ParseError::Length { expected: 16, actual: 15 }
        );
    }

    #[test]
    fn split_counted_rejects_trailing_garbage() {
        let mut bytes = join_counted([[7u8; 4]].iter());
        bytes.extend_from_slice(&[0xff, 0xff]);
        assert_eq!(split_counted(&bytes, 4).unwrap_err(), ParseError::TrailingBytes(2));
    }

    #[test]
    fn split_counted_rejects_huge_count_without_allocating() {
        let bytes = u64::MAX.to_le_bytes();
        assert!(matches!(
            split_counted(&bytes, 32).unwrap_err(),
            ParseError::Invalid(_) | ParseError::Length { .. }
        ));
    }

    #[test]
    fn read_exact_rejects_trailing_bytes() {
        let mut bytes = 5u64.to_le_bytes().to_vec();
        assert_eq!(read_exact::<u64>(&bytes).unwrap(), 5);
        bytes.push(0);
        assert_eq!(read_exact::<u64>(&bytes).unwrap_err(), ParseError::TrailingBytes(1));
    }

    #[test]
    fn field_tags_differ_between_equal_width_fields() {
        let bn254 = field_tag::<ark_bn254::Fr>();
        let bls12_381 = field_tag::<ark_bls12_381::Fr>();
        assert_eq!(bn254.len(), 32);
        assert_eq!(bls12_381.len(), 32);
        assert_ne!(bn254, bls12_381);
        assert_eq!(field_tag::<ark_bw6_761::Fr>().len(), 48);
    }

    #[test]
    fn scalars_from_another_field_are_refused() {
        let y = ark_bls12_381::Fr::from(35u64);
        let bytes = join_tagged(&field_tag::<ark_bls12_381::Fr>(), [to_le(y)].iter());
        assert_eq!(read_scalars::<ark_bls12_381::Fr>(&bytes).unwrap(), vec![y]);
        assert_eq!(
            read_scalars::<ark_bn254::Fr>(&bytes).unwrap_err(),
            ParseError::ForeignField
        );
    }

    #[test]
    fn tagged_witness_rejects_short_tag() {
        assert_eq!(read_scalars::<ark_bn254::Fr>(&[]).unwrap_err(), ParseError::Empty);
        assert_eq!(
            read_scalars::<ark_bn254::Fr>(&[1, 2, 3]).unwrap_err(),
            ParseError::UnexpectedEof
        );
    }

    fn to_le<F: PrimeField>(value: F) -> Vec<u8> {
        value.into_bigint().to_bytes_le()
    }

    #[test]
    fn read_exact_rejects_truncated() {
        assert_eq!(read_exact::<u64>(&[1, 2, 3]).unwrap_err(), ParseError::UnexpectedEof);
    }
}

//! Endian-neutral encoding:
//! * Fixed-length numbers are encoded with least-significant byte first

pub(crate) fn put_fixed32(dst: &mut Vec<u8>, value: u32) {
    dst.extend_from_slice(&value.to_le_bytes());
}

pub(crate) fn put_fixed64(dst: &mut Vec<u8>, value: u64) {
    dst.extend_from_slice(&value.to_le_bytes());
}

/// Decode the first four bytes of `src`.  None if `src` is too short.
#[inline]
pub(crate) fn decode_fixed32(src: &[u8]) -> Option<u32> {
    let bytes: [u8; 4] = src.get(..4)?.try_into().ok()?;
    Some(u32::from_le_bytes(bytes))
}

/// Decode the first eight bytes of `src`.  None if `src` is too short.
#[inline]
pub(crate) fn decode_fixed64(src: &[u8]) -> Option<u64> {
    let bytes: [u8; 8] = src.get(..8)?.try_into().ok()?;
    Some(u64::from_le_bytes(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed32_test() {
        let mut s = Vec::new();
        for i in 0..100_000u32 {
            put_fixed32(&mut s, i);
        }

        for i in 0..100_000u32 {
            let idx = (i * 4) as usize;
            assert_eq!(Some(i), decode_fixed32(&s[idx..]));
        }
    }

    #[test]
    fn fixed64_test() {
        let mut s = Vec::new();
        for power in 0..64 {
            let v = 1u64 << power;
            put_fixed64(&mut s, v - 1);
            put_fixed64(&mut s, v);
            put_fixed64(&mut s, v + 1);
        }

        for power in 0..64 {
            let v = 1u64 << power;
            let idx = power * 24;
            assert_eq!(Some(v - 1), decode_fixed64(&s[idx..]));
            assert_eq!(Some(v), decode_fixed64(&s[idx + 8..]));
            assert_eq!(Some(v + 1), decode_fixed64(&s[idx + 16..]));
        }
    }

    #[test]
    fn encoding_output_test() {
        // Test that encoding routines generate little-endian encodings
        let mut dst = Vec::new();
        put_fixed32(&mut dst, 0x04030201);
        assert_eq!(vec![0x01, 0x02, 0x03, 0x04], dst);

        dst.clear();
        put_fixed64(&mut dst, 0x0807060504030201);
        assert_eq!(vec![0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08], dst);
    }

    #[test]
    fn truncation_test() {
        let mut s = Vec::new();
        put_fixed64(&mut s, u64::MAX);
        for i in 0..8 {
            assert_eq!(None, decode_fixed64(&s[..i]));
        }
        for i in 0..4 {
            assert_eq!(None, decode_fixed32(&s[..i]));
        }
        assert_eq!(Some(u32::MAX), decode_fixed32(&s));
    }
}

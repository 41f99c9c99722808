use crc32c::{crc32c, crc32c_append};

static MASK_DELTA: u32 = 0xa282_ead8;

/// crc32c of `data`.
#[inline]
pub(crate) fn value(data: &[u8]) -> u32 {
    crc32c(data)
}

/// crc32c of concat(A, data), given `init_crc` = crc32c(A).
#[inline]
pub(crate) fn extend(init_crc: u32, data: &[u8]) -> u32 {
    crc32c_append(init_crc, data)
}

/// Stored checksums are masked so that a buffer holding its own crc
/// does not checksum to a fixed point.
#[inline]
pub(crate) fn mask(crc: u32) -> u32 {
    crc.rotate_right(15).wrapping_add(MASK_DELTA)
}

#[inline]
pub(crate) fn unmask(masked_crc: u32) -> u32 {
    masked_crc.wrapping_sub(MASK_DELTA).rotate_left(15)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_results_test() {
        // From rfc3720 section B.4.
        assert_eq!(0x8a9136aa, value(&[0u8; 32]));
        assert_eq!(0x62a8ab43, value(&[0xffu8; 32]));

        let ascending: Vec<u8> = (0..32u8).collect();
        assert_eq!(0x46dd794e, value(&ascending));
        let descending: Vec<u8> = (0..32u8).rev().collect();
        assert_eq!(0x113fdb5c, value(&descending));
    }

    #[test]
    fn extend_test() {
        assert_eq!(value(b"pcg64 state"), extend(value(b"pcg64 "), b"state"));
    }

    #[test]
    fn mask_test() {
        let crc = value(b"foo");
        assert_ne!(crc, mask(crc));
        assert_ne!(crc, mask(mask(crc)));
        assert_eq!(crc, unmask(mask(crc)));
        assert_eq!(crc, unmask(unmask(mask(mask(crc)))));
        // Values near the top of the range must wrap, not overflow.
        assert_eq!(u32::MAX, unmask(mask(u32::MAX)));
    }
}

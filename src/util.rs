pub(crate) mod coding;
pub(crate) mod crc32c;
pub(crate) mod uint128;
#[cfg(test)]
pub(crate) mod testutil;

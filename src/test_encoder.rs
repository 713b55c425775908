//! A tiny protobuf writer used to build test fixtures.
//!
//! Unlike a proto3 encoder it writes every value it is given, including
//! zeros and empty strings, so tests can control field presence exactly.

#[repr(u32)]
enum WireType {
    Varint = 0,
    Len = 2,
    I32 = 5,
}

/// Encodes the unsigned integer `n` using the protobuf varint (variable integer)
/// format.
fn unsigned_varint_encode(mut n: u64, dest: &mut Vec<u8>) {
    loop {
        // Read least significant 7 bits
        let mut b = (n & 0b0111_1111) as u8;
        n >>= 7;
        // Set top bit when not yet done
        if n != 0 {
            b |= 0b1000_0000;
        }
        dest.push(b);
        if n == 0 {
            break;
        }
    }
}

#[derive(Default, Clone)]
pub struct WireWriter {
    output: Vec<u8>,
}

impl WireWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bytes(mut self, field_number: u32, data: impl AsRef<[u8]>) -> Self {
        let data = data.as_ref();
        self.tag(field_number, WireType::Len);
        unsigned_varint_encode(data.len() as u64, &mut self.output);
        self.output.extend_from_slice(data);
        self
    }

    pub fn string(self, field_number: u32, data: impl AsRef<str>) -> Self {
        self.bytes(field_number, data.as_ref().as_bytes())
    }

    pub fn message(self, field_number: u32, value: &WireWriter) -> Self {
        self.bytes(field_number, value.as_bytes())
    }

    pub fn uint64(mut self, field_number: u32, value: u64) -> Self {
        self.tag(field_number, WireType::Varint);
        unsigned_varint_encode(value, &mut self.output);
        self
    }

    pub fn int64(self, field_number: u32, value: i64) -> Self {
        self.uint64(field_number, value as u64)
    }

    /// Negative values take 10 bytes, as for int64.
    pub fn int32(self, field_number: u32, value: i32) -> Self {
        self.uint64(field_number, value as i64 as u64)
    }

    pub fn bool(self, field_number: u32, value: bool) -> Self {
        self.uint64(field_number, value.into())
    }

    pub fn fixed32(mut self, field_number: u32, value: u32) -> Self {
        self.tag(field_number, WireType::I32);
        self.output.extend_from_slice(&value.to_le_bytes());
        self
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.output
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.output
    }

    fn tag(&mut self, field_number: u32, field_type: WireType) {
        let tag: u32 = (field_number << 3) | field_type as u32;
        unsigned_varint_encode(tag.into(), &mut self.output);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn writes_zero_values() {
        let data = WireWriter::new()
            .uint64(1, 0)
            .string(2, "")
            .bool(3, false)
            .into_vec();
        assert_eq!(data, hex!("0800 1200 1800"));
    }

    #[test]
    fn int32_works() {
        // values from protoc
        assert_eq!(WireWriter::new().int32(7, -1).into_vec(), hex!("38ffffffffffffffffff01"));
        assert_eq!(WireWriter::new().int32(7, 900).into_vec(), hex!("388407"));
    }

    #[test]
    fn message_works() {
        let inner = WireWriter::new().uint64(1, 150);
        let data = WireWriter::new().message(3, &inner).fixed32(4, 1).into_vec();
        assert_eq!(data, hex!("1a03089601 2501000000"));
    }
}

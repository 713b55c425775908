use crate::slice_reader::SliceReader;

/// The longest valid encoding of a u64 varint
const MAX_VARINT_LEN: usize = 10;

/// Reads an unsigned varint. Returns `None` if the data ends before the
/// last byte of the varint or the value does not fit into 64 bits.
pub fn read_unsigned_varint(data: &mut SliceReader) -> Option<u64> {
    let mut out = 0u64;
    for byte_counter in 0..MAX_VARINT_LEN {
        let byte = data.read_one()?;
        // the 10th byte only carries the top bit of a u64
        if byte_counter == MAX_VARINT_LEN - 1 && byte > 1 {
            return None;
        }
        out |= ((byte & 0x7f) as u64) << (byte_counter * 7);
        if byte & 0x80 == 0 {
            return Some(out);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_unsigned_varint_works() {
        // tests from https://codeberg.org/ft/ufw/src/tag/v4.1.0/test/t-varint.c#L92-L101
        {
            let original = vec![0u8];
            let mut reader = SliceReader::new(&original);
            assert_eq!(read_unsigned_varint(&mut reader).unwrap(), 0);
            assert_eq!(reader.len(), 0);

            let original = vec![0x80, 0x01];
            let mut reader = SliceReader::new(&original);
            assert_eq!(read_unsigned_varint(&mut reader).unwrap(), 128);
            assert_eq!(reader.len(), 0);

            let original = vec![0xd2, 0x09];
            let mut reader = SliceReader::new(&original);
            assert_eq!(read_unsigned_varint(&mut reader).unwrap(), 1234);
            assert_eq!(reader.len(), 0);

            let original = vec![0xff, 0xff, 0xff, 0xff, 0x0f];
            let mut reader = SliceReader::new(&original);
            assert_eq!(read_unsigned_varint(&mut reader).unwrap(), u32::MAX as u64);
            assert_eq!(reader.len(), 0);
        }

        // examples from https://github.com/multiformats/unsigned-varint
        {
            // two different representations of the same value
            let mut reader = SliceReader::new(&[0x81, 0x00]);
            assert_eq!(read_unsigned_varint(&mut reader).unwrap(), 1);
            let mut reader = SliceReader::new(&[0x1]);
            assert_eq!(read_unsigned_varint(&mut reader).unwrap(), 1);

            for (expected, data) in [
                (1, vec![0x01]),
                (127, vec![0x7f]),
                (128, vec![0x80, 0x01]),
                (255, vec![0xff, 0x01]),
                (300, vec![0xac, 0x02]),
                (16384, vec![0x80, 0x80, 0x01]),
            ] {
                let mut reader = SliceReader::new(&data);
                assert_eq!(read_unsigned_varint(&mut reader).unwrap(), expected);
            }
        }

        // u64::MAX takes all 10 bytes
        let data = [0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0x01];
        let mut reader = SliceReader::new(&data);
        assert_eq!(read_unsigned_varint(&mut reader).unwrap(), u64::MAX);
        assert!(reader.is_empty());

        // trailing data is left alone
        let data = [0xac, 0x02, 0x07];
        let mut reader = SliceReader::new(&data);
        assert_eq!(read_unsigned_varint(&mut reader).unwrap(), 300);
        assert_eq!(reader.len(), 1);
    }

    #[test]
    fn read_unsigned_varint_rejects_bad_input() {
        // continuation bit set on the last byte
        let mut reader = SliceReader::new(&[0x80, 0x80]);
        assert_eq!(read_unsigned_varint(&mut reader), None);

        // empty
        let mut reader = SliceReader::new(&[]);
        assert_eq!(read_unsigned_varint(&mut reader), None);

        // overflows 64 bits
        let data = [0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0x02];
        let mut reader = SliceReader::new(&data);
        assert_eq!(read_unsigned_varint(&mut reader), None);

        // 11 bytes
        let data = [0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x00];
        let mut reader = SliceReader::new(&data);
        assert_eq!(read_unsigned_varint(&mut reader), None);
    }
}

use std::io::{self, ErrorKind, Read};

/// Fills `buffer` from `reader`, stopping early only at end of input.
///
/// Returns the number of bytes read; `0` means the source is exhausted.
pub fn read_block<R: Read + ?Sized>(reader: &mut R, buffer: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buffer.len() {
        match reader.read(&mut buffer[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

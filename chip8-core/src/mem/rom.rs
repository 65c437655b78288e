use log::trace;
use std::io;

use crate::err::Chip8Error;

///
/// Stage a ROM from a byte source into a fully materialized buffer. Short
/// reads are retried until `expected` bytes have been collected; a source
/// that runs dry first fails with `TruncatedSource`, so a partially staged
/// ROM never reaches memory. `Interrupted` reads are retried as usual.
///
/// The expected length comes from the collaborator that owns the source
/// (typically file metadata); the raw ROM layout is simply big-endian
/// instruction words starting at offset 0, mapped verbatim to `0x200`.
///
pub fn read_rom<R: io::Read>(reader: &mut R, expected: usize) -> Result<Vec<u8>, Chip8Error> {
    let mut buf = vec![0u8; expected];
    let mut got = 0;

    while got < expected {
        match reader.read(&mut buf[got..]) {
            Ok(0) => {
                return Err(Chip8Error::TruncatedSource { got, expected });
            }
            Ok(n) => {
                trace!("ROM source yielded {} bytes ({}/{})", n, got + n, expected);
                got += n;
            }
            Err(ref e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(_) => {
                return Err(Chip8Error::TruncatedSource { got, expected });
            }
        }
    }

    Ok(buf)
}

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

pub const STDIN_NAME: &str = "-";

/// Reads the whole of `path` into memory. The name `-` reads standard input.
pub fn read_input<P: AsRef<Path>>(path: P) -> io::Result<Vec<u8>> {
    let path = path.as_ref();
    if path.as_os_str() == STDIN_NAME {
        return read_all(io::stdin().lock())
    }
    let file = File::open(path)?;
    read_all(BufReader::new(file))
}

pub fn read_all<R: Read>(mut reader: R) -> io::Result<Vec<u8>> {
    let mut bytes: Vec<u8> = Vec::new();
    reader.read_to_end(&mut bytes)?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn reads_binary_file_contents() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0x00, 0xff, 0x80, 0x00]).unwrap();
        file.flush().unwrap();

        assert_eq!(read_input(file.path()).unwrap(), vec![0x00, 0xff, 0x80, 0x00]);
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_input(dir.path().join("absent")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn read_all_drains_reader() {
        assert_eq!(read_all(&b"abc"[..]).unwrap(), b"abc".to_vec());
    }
}

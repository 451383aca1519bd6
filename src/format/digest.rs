//! Content digests.

use md5::{Digest, Md5};

/// Lowercase hex MD5 of `content`.
pub fn md5(content: impl AsRef<[u8]>) -> String {
    format!("{:x}", Md5::digest(content.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_md5_empty() {
        assert_eq!(md5(""), "d41d8cd98f00b204e9800998ecf8427e");
    }

    #[test]
    fn test_md5_text_and_bytes() {
        assert_eq!(md5("hello"), "5d41402abc4b2a76b9719d911017c592");
        assert_eq!(md5(b"hello".to_vec()), md5("hello"));
    }
}

//! Entry-name decoding.
//!
//! The ZIP format predates Unicode adoption: an entry name is just bytes,
//! and general-purpose flag bit 11 (the "language encoding flag") marks the
//! name as UTF-8. Archives produced by historical Chinese tools leave the
//! bit unset and store names in the regional codepage, which for this
//! program's payloads means GBK and its GB18030 superset.

use encoding_rs::GB18030;

/// General-purpose flag bit 11: entry name and comment are UTF-8.
pub const UTF8_NAME_FLAG: u16 = 1 << 11;

/// Whether an entry's general-purpose flags mark its name as UTF-8.
pub fn is_utf8_name(flags: u16) -> bool {
    flags & UTF8_NAME_FLAG != 0
}

/// Decode an entry name according to the general-purpose flags.
///
/// Never fails: malformed sequences in either encoding are replaced with
/// U+FFFD rather than aborting extraction over an undecodable name.
pub fn decode_entry_name(raw: &[u8], flags: u16) -> String {
    if is_utf8_name(flags) {
        String::from_utf8_lossy(raw).into_owned()
    } else {
        let (decoded, _, _) = GB18030.decode(raw);
        decoded.into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gb18030_name_with_flag_unset() {
        // "中文" in GBK bytes
        let raw = [0xD6, 0xD0, 0xCE, 0xC4];
        assert_eq!(decode_entry_name(&raw, 0), "中文");
    }

    #[test]
    fn utf8_name_with_flag_set() {
        let raw = "目录/文件.txt".as_bytes();
        assert_eq!(decode_entry_name(raw, UTF8_NAME_FLAG), "目录/文件.txt");
    }

    #[test]
    fn ascii_decodes_identically_either_way() {
        let raw = b"plugins/git/git.plugin.zsh";
        assert_eq!(decode_entry_name(raw, 0), "plugins/git/git.plugin.zsh");
        assert_eq!(
            decode_entry_name(raw, UTF8_NAME_FLAG),
            "plugins/git/git.plugin.zsh"
        );
    }

    #[test]
    fn other_flag_bits_do_not_select_utf8() {
        // Bit 3 (data descriptor) set, bit 11 clear: still the legacy codepage
        let raw = [0xB2, 0xE2, 0xCA, 0xD4]; // "测试" in GBK
        assert_eq!(decode_entry_name(&raw, 1 << 3), "测试");
    }

    #[test]
    fn malformed_bytes_are_replaced() {
        // 0xFF is not a valid GB18030 lead byte here
        let decoded = decode_entry_name(&[0xFF, 0xFF], 0);
        assert!(decoded.contains('\u{FFFD}'));

        let decoded = decode_entry_name(&[0xE4, 0xB8], UTF8_NAME_FLAG);
        assert!(decoded.contains('\u{FFFD}'));
    }
}

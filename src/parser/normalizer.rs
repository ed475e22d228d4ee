//! 输入解码与分行

use std::borrow::Cow;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];
const UTF16_LE_BOM: &[u8] = &[0xFF, 0xFE];
const UTF16_BE_BOM: &[u8] = &[0xFE, 0xFF];

/// 按 BOM 自动识别编码并解码为文本，默认 UTF-8。非法字节用替换字符代替
pub fn decode_input(bytes: &[u8]) -> Cow<'_, str> {
    if let Some(rest) = bytes.strip_prefix(UTF8_BOM) {
        return String::from_utf8_lossy(rest);
    }
    if let Some(rest) = bytes.strip_prefix(UTF16_LE_BOM) {
        return Cow::Owned(decode_utf16(rest, u16::from_le_bytes));
    }
    if let Some(rest) = bytes.strip_prefix(UTF16_BE_BOM) {
        return Cow::Owned(decode_utf16(rest, u16::from_be_bytes));
    }
    String::from_utf8_lossy(bytes)
}

fn decode_utf16(bytes: &[u8], to_unit: fn([u8; 2]) -> u16) -> String {
    let units = bytes.chunks_exact(2).map(|pair| to_unit([pair[0], pair[1]]));
    char::decode_utf16(units)
        .map(|r| r.unwrap_or(char::REPLACEMENT_CHARACTER))
        .collect()
}

/// 分行并去掉每行首尾空白。支持 `\n`、`\r\n` 和单独的 `\r`
pub fn normalize_lines(text: &str) -> Vec<String> {
    let unified = text.replace("\r\n", "\n").replace('\r', "\n");
    unified.lines().map(|line| line.trim().to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_utf8_bom() {
        let bytes = b"\xEF\xBB\xBFTitle: X";
        assert_eq!(decode_input(bytes), "Title: X");
    }

    #[test]
    fn decodes_utf16_le() {
        let mut bytes = vec![0xFF, 0xFE];
        for unit in "INT 家".encode_utf16() {
            bytes.extend_from_slice(&unit.to_le_bytes());
        }
        assert_eq!(decode_input(&bytes), "INT 家");
    }

    #[test]
    fn decodes_utf16_be() {
        let mut bytes = vec![0xFE, 0xFF];
        for unit in "JOHN".encode_utf16() {
            bytes.extend_from_slice(&unit.to_be_bytes());
        }
        assert_eq!(decode_input(&bytes), "JOHN");
    }

    #[test]
    fn invalid_utf8_is_lossy() {
        let decoded = decode_input(b"ab\xFFcd");
        assert_eq!(decoded, "ab\u{FFFD}cd");
    }

    #[test]
    fn splits_and_trims() {
        let lines = normalize_lines("  .HOUSE  \r\n\r\nJOHN\rHello\n");
        assert_eq!(lines, vec![".HOUSE", "", "JOHN", "Hello"]);
    }
}

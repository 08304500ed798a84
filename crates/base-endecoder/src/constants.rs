/// RFC 4648 base32 alphabet.
pub const BASE32: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

/// Standard base64 alphabet.
pub const BASE64: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// URL-safe base64 alphabet (uses - and _ instead of + and /).
pub const BASE64_URL: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// Padding character used by the named encodings.
pub const PAD: char = '=';

/// Symbols per padded group in base32 output.
pub const BASE32_GROUP: usize = 8;

/// Symbols per padded group in base64 and base64url output.
pub const BASE64_GROUP: usize = 4;

//! Secret generation.

use rand::rngs::OsRng;
use rand::Rng;
use zeroize::Zeroizing;

/// Characters drawn from: letters, digits and punctuation that survives
/// shells and URLs reasonably well. Never whitespace or line terminators.
const CHARSET: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!#%*+-.:=?@^_~";

/// Generate a random secret of `length` characters from the OS RNG.
pub fn generate(length: usize) -> Zeroizing<String> {
    let mut rng = OsRng;
    let mut out = Zeroizing::new(String::with_capacity(length));
    for _ in 0..length {
        let idx = rng.gen_range(0..CHARSET.len());
        out.push(CHARSET[idx] as char);
    }
    out
}
